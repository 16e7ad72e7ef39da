//!
//! The in-memory blockchain used in tests.
//!

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::deployer::address_predictor::AddressPredictor;
use crate::deployer::factory::Factory;

use super::receipt::Receipt;
use super::transaction::Transaction;
use super::Chain;

///
/// The in-memory blockchain state.
///
#[derive(Debug, Default)]
struct State {
    /// The deployed code.
    code: HashMap<web3::types::Address, Vec<u8>>,
    /// The account balances.
    balances: HashMap<web3::types::Address, web3::types::U256>,
    /// The signer create nonce.
    nonce: u64,
    /// The sent signed transactions.
    transactions: Vec<Transaction>,
    /// The sent raw transactions.
    raw_transactions: Vec<Vec<u8>>,
    /// Whether every signed transaction reverts.
    reverting: bool,
}

///
/// The in-memory blockchain.
///
/// Executes value transfers, contract creations, and the deterministic factory
/// calls and bootstrap, without running any bytecode.
///
#[derive(Debug)]
pub struct MemoryChain {
    /// The signer address.
    signer: web3::types::Address,
    /// The mutable state.
    state: Mutex<State>,
}

impl MemoryChain {
    /// The stand-in runtime code of the factory.
    pub const FACTORY_CODE: [u8; 2] = [0x60, 0x00];

    ///
    /// Creates a chain where the signer owns `balance` wei.
    ///
    pub fn new(signer: web3::types::Address, balance: web3::types::U256) -> Self {
        let mut state = State::default();
        state.balances.insert(signer, balance);
        Self {
            signer,
            state: Mutex::new(state),
        }
    }

    ///
    /// Creates a chain with the deterministic factory already deployed.
    ///
    pub fn with_factory(signer: web3::types::Address, balance: web3::types::U256) -> Self {
        let chain = Self::new(signer, balance);
        chain.set_code(Factory::ADDRESS, Self::FACTORY_CODE.to_vec());
        chain
    }

    ///
    /// Sets the code at the address.
    ///
    pub fn set_code(&self, address: web3::types::Address, code: Vec<u8>) {
        self.lock().code.insert(address, code);
    }

    ///
    /// Sets the balance of the address.
    ///
    pub fn set_balance(&self, address: web3::types::Address, balance: web3::types::U256) {
        self.lock().balances.insert(address, balance);
    }

    ///
    /// Makes every following signed transaction revert.
    ///
    pub fn set_reverting(&self, reverting: bool) {
        self.lock().reverting = reverting;
    }

    ///
    /// Returns the sent signed transactions.
    ///
    pub fn transactions(&self) -> Vec<Transaction> {
        self.lock().transactions.clone()
    }

    ///
    /// Returns the number of sent raw transactions.
    ///
    pub fn raw_transactions_count(&self) -> usize {
        self.lock().raw_transactions.len()
    }

    ///
    /// Locks the state.
    ///
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("Sync")
    }

    ///
    /// Returns a unique transaction hash.
    ///
    fn hash(kind: &[u8], index: usize) -> web3::types::H256 {
        let mut preimage = kind.to_vec();
        preimage.extend((index as u64).to_be_bytes());
        web3::types::H256::from(crate::utils::keccak256(preimage.as_slice()))
    }
}

impl State {
    ///
    /// Moves the value between the accounts.
    ///
    fn transfer(
        &mut self,
        from: web3::types::Address,
        to: web3::types::Address,
        value: web3::types::U256,
    ) -> anyhow::Result<()> {
        let balance = self.balances.get(&from).copied().unwrap_or_default();
        if balance < value {
            anyhow::bail!("Insufficient funds of {from:?}: {balance} < {value}");
        }
        self.balances.insert(from, balance - value);
        *self.balances.entry(to).or_default() += value;
        Ok(())
    }

    ///
    /// Executes the factory call, returning `false` on revert.
    ///
    fn create2(&mut self, data: &[u8]) -> bool {
        if data.len() < 32 {
            return false;
        }
        let salt = web3::types::H256::from_slice(&data[..32]);
        let init_code = &data[32..];
        let address = AddressPredictor::new(Factory::ADDRESS).predict(&salt, init_code);
        if self.code.contains_key(&address) {
            return false;
        }
        self.code.insert(address, init_code.to_vec());
        true
    }
}

#[async_trait::async_trait]
impl Chain for MemoryChain {
    fn signer(&self) -> web3::types::Address {
        self.signer
    }

    async fn code(&self, address: web3::types::Address) -> anyhow::Result<Vec<u8>> {
        Ok(self.lock().code.get(&address).cloned().unwrap_or_default())
    }

    async fn balance(&self, address: web3::types::Address) -> anyhow::Result<web3::types::U256> {
        Ok(self.lock().balances.get(&address).copied().unwrap_or_default())
    }

    async fn send_transaction(&self, transaction: Transaction) -> anyhow::Result<Receipt> {
        let mut state = self.lock();
        state.transactions.push(transaction.clone());
        let transaction_hash = Self::hash(b"signed", state.transactions.len());

        if state.reverting {
            return Ok(Receipt {
                transaction_hash,
                contract_address: None,
                success: false,
            });
        }

        let mut contract_address = None;
        let success = match transaction.to {
            Some(to) => {
                state.transfer(self.signer, to, transaction.value)?;
                if to == Factory::ADDRESS && state.code.contains_key(&Factory::ADDRESS) {
                    state.create2(transaction.data.as_slice())
                } else {
                    true
                }
            }
            None => {
                let mut preimage = self.signer.as_bytes().to_vec();
                preimage.extend(state.nonce.to_be_bytes());
                state.nonce += 1;
                let hash = crate::utils::keccak256(preimage.as_slice());
                let address = web3::types::Address::from_slice(&hash[12..]);
                state.code.insert(address, transaction.data);
                contract_address = Some(address);
                true
            }
        };

        Ok(Receipt {
            transaction_hash,
            contract_address,
            success,
        })
    }

    async fn send_raw_transaction(&self, raw_transaction: Vec<u8>) -> anyhow::Result<Receipt> {
        if raw_transaction != Factory::transaction()? {
            anyhow::bail!("Unsupported raw transaction");
        }

        let mut state = self.lock();
        if state.code.contains_key(&Factory::ADDRESS) {
            anyhow::bail!("Nonce too low");
        }
        state.transfer(Factory::DEPLOYER, web3::types::Address::zero(), Factory::funding())?;
        state
            .code
            .insert(Factory::ADDRESS, Self::FACTORY_CODE.to_vec());
        state.raw_transactions.push(raw_transaction);

        Ok(Receipt {
            transaction_hash: Self::hash(b"raw", state.raw_transactions.len()),
            contract_address: Some(Factory::ADDRESS),
            success: true,
        })
    }
}
