//!
//! The contract deployer tests.
//!

use std::str::FromStr;

use crate::artifacts::Artifact;
use crate::chain::memory::MemoryChain;
use crate::chain::transaction::Transaction;
use crate::chain::Chain;
use crate::console::Console;

use super::factory::Factory;
use super::request::Request;
use super::Deployer;

const SIGNER: &str = "f39fd6e51aad88f6f4ce6ab8827279cfffb92266";

const ENTRY_POINT: &str = "0576a174d229e3cfa37253523e645a78a0c91b57";

fn address(value: &str) -> web3::types::Address {
    web3::types::Address::from_str(value).expect("Always valid")
}

fn ether(amount: u64) -> web3::types::U256 {
    web3::types::U256::exp10(18) * web3::types::U256::from(amount)
}

fn artifact(bytecode: &str) -> Artifact {
    Artifact::new(
        "SimpleAccountFactory".to_owned(),
        "contracts/samples/SimpleAccountFactory.sol".to_owned(),
        serde_json::json!([]),
        bytecode,
        "",
    )
}

fn request(entry_point: &str) -> Request {
    Request::new(
        "SimpleAccountFactory".to_owned(),
        address(SIGNER),
        vec![web3::ethabi::Token::Address(address(entry_point))],
        web3::types::U256::from(6_000_000),
    )
    .deterministic()
}

#[tokio::test]
async fn bootstraps_factory_and_deploys() {
    let chain = MemoryChain::new(address(SIGNER), ether(1));
    let deployer = Deployer::new(&chain, Console::quiet());

    let result = deployer
        .deploy(&request(ENTRY_POINT), &artifact("6080604052"))
        .await
        .expect("Always valid");

    assert!(result.newly_deployed);
    assert!(result.transaction_hash.is_some());
    assert_eq!(
        result.address,
        address("e0175c5ad0cd96672a0ee469472acd07a5533d2a")
    );
    assert!(!chain.code(result.address).await.expect("Always valid").is_empty());
    assert!(!chain.code(Factory::ADDRESS).await.expect("Always valid").is_empty());
    assert_eq!(chain.raw_transactions_count(), 1);

    let transactions = chain.transactions();
    assert_eq!(transactions.len(), 2);
    assert_eq!(
        transactions[0],
        Transaction::transfer(Factory::DEPLOYER, Factory::funding())
    );
    assert_eq!(transactions[1].to, Some(Factory::ADDRESS));
    assert_eq!(transactions[1].gas, Some(web3::types::U256::from(6_000_000)));
    assert_eq!(&transactions[1].data[..32], &[0u8; 32]);
}

#[tokio::test]
async fn funds_only_missing_part() {
    let chain = MemoryChain::new(address(SIGNER), ether(1));
    let funded = Factory::funding() * web3::types::U256::from(4) / web3::types::U256::from(10);
    chain.set_balance(Factory::DEPLOYER, funded);
    let deployer = Deployer::new(&chain, Console::quiet());

    deployer
        .deploy(&request(ENTRY_POINT), &artifact("6080604052"))
        .await
        .expect("Always valid");

    assert_eq!(
        chain.transactions()[0],
        Transaction::transfer(Factory::DEPLOYER, Factory::funding() - funded)
    );
}

#[tokio::test]
async fn existing_factory_is_not_redeployed() {
    let chain = MemoryChain::with_factory(address(SIGNER), ether(1));
    let deployer = Deployer::new(&chain, Console::quiet());

    deployer
        .deploy(&request(ENTRY_POINT), &artifact("6080604052"))
        .await
        .expect("Always valid");

    assert_eq!(chain.raw_transactions_count(), 0);
    assert_eq!(chain.transactions().len(), 1);
}

#[tokio::test]
async fn redeployment_is_noop() {
    let chain = MemoryChain::new(address(SIGNER), ether(1));
    let deployer = Deployer::new(&chain, Console::quiet());

    let first = deployer
        .deploy(&request(ENTRY_POINT), &artifact("6080604052"))
        .await
        .expect("Always valid");
    let transactions_count = chain.transactions().len();
    let second = deployer
        .deploy(&request(ENTRY_POINT), &artifact("6080604052"))
        .await
        .expect("Always valid");

    assert_eq!(first.address, second.address);
    assert!(!second.newly_deployed);
    assert_eq!(second.transaction_hash, None);
    assert_eq!(chain.transactions().len(), transactions_count);
}

#[tokio::test]
async fn different_argument_changes_address() {
    let chain = MemoryChain::with_factory(address(SIGNER), ether(1));
    let deployer = Deployer::new(&chain, Console::quiet());

    let first = deployer
        .deploy(&request(ENTRY_POINT), &artifact("6080604052"))
        .await
        .expect("Always valid");
    let second = deployer
        .deploy(
            &request("0000000000000000000000000000000000000001"),
            &artifact("6080604052"),
        )
        .await
        .expect("Always valid");

    assert_ne!(first.address, second.address);
    assert!(second.newly_deployed);
}

#[tokio::test]
async fn reverted_deployment() {
    let chain = MemoryChain::with_factory(address(SIGNER), ether(1));
    chain.set_reverting(true);
    let deployer = Deployer::new(&chain, Console::quiet());

    let error = deployer
        .deploy(&request(ENTRY_POINT), &artifact("6080604052"))
        .await
        .expect_err("Must fail");

    assert!(error.to_string().contains("reverted"));
}

#[tokio::test]
async fn unfunded_signer() {
    let chain = MemoryChain::new(address(SIGNER), web3::types::U256::zero());
    let deployer = Deployer::new(&chain, Console::quiet());

    let error = deployer
        .deploy(&request(ENTRY_POINT), &artifact("6080604052"))
        .await
        .expect_err("Must fail");

    assert!(error.to_string().contains("Insufficient funds"));
    assert!(chain.code(Factory::ADDRESS).await.expect("Always valid").is_empty());
}

#[tokio::test]
async fn signer_mismatch() {
    let chain = MemoryChain::with_factory(address(ENTRY_POINT), ether(1));
    let deployer = Deployer::new(&chain, Console::quiet());

    let error = deployer
        .deploy(&request(ENTRY_POINT), &artifact("6080604052"))
        .await
        .expect_err("Must fail");

    assert!(error.to_string().contains("network signer"));
    assert!(chain.transactions().is_empty());
}

#[tokio::test]
async fn interface_is_not_deployed() {
    let chain = MemoryChain::with_factory(address(SIGNER), ether(1));
    let deployer = Deployer::new(&chain, Console::quiet());

    let error = deployer
        .deploy(&request(ENTRY_POINT), &artifact(""))
        .await
        .expect_err("Must fail");

    assert!(error.to_string().contains("no bytecode"));
    assert!(chain.transactions().is_empty());
}

#[tokio::test]
async fn plain_create() {
    let chain = MemoryChain::new(address(SIGNER), ether(1));
    let deployer = Deployer::new(&chain, Console::quiet());
    let mut request = request(ENTRY_POINT);
    request.deterministic = false;

    let result = deployer
        .deploy(&request, &artifact("6080604052"))
        .await
        .expect("Always valid");

    assert!(result.newly_deployed);
    assert!(!chain.code(result.address).await.expect("Always valid").is_empty());
    assert_eq!(chain.raw_transactions_count(), 0);
    assert_eq!(chain.transactions()[0].to, None);
}
