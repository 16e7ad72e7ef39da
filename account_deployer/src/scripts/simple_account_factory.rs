//!
//! The `SimpleAccountFactory` deployment script.
//!

use crate::deployer::request::Request;

use super::Script;

///
/// The `SimpleAccountFactory` deployment script.
///
/// Deploys the factory deterministically, bound to the shared entry point.
///
#[derive(Debug, Default)]
pub struct SimpleAccountFactory;

impl SimpleAccountFactory {
    /// The entry point the accounts are bound to.
    pub const ENTRY_POINT: web3::types::Address = web3::types::H160([
        0x05, 0x76, 0xa1, 0x74, 0xd2, 0x29, 0xe3, 0xcf, 0xa3, 0x72, 0x53, 0x52, 0x3e, 0x64, 0x5a,
        0x78, 0xa0, 0xc9, 0x1b, 0x57,
    ]);

    /// The deployment gas limit.
    pub const GAS_LIMIT: u64 = 6_000_000;
}

impl Script for SimpleAccountFactory {
    fn contract_name(&self) -> &'static str {
        "SimpleAccountFactory"
    }

    fn request(&self, from: web3::types::Address) -> anyhow::Result<Request> {
        Ok(Request::new(
            self.contract_name().to_owned(),
            from,
            vec![web3::ethabi::Token::Address(Self::ENTRY_POINT)],
            web3::types::U256::from(Self::GAS_LIMIT),
        )
        .deterministic())
    }
}

#[cfg(test)]
mod tests {
    use super::SimpleAccountFactory;
    use crate::scripts::Script;

    #[test]
    fn request() {
        let from = web3::types::Address::repeat_byte(0x11);

        let request = SimpleAccountFactory
            .request(from)
            .expect("Always valid");

        assert_eq!(request.contract_name, "SimpleAccountFactory");
        assert_eq!(request.from, from);
        assert!(request.deterministic);
        assert_eq!(request.salt, web3::types::H256::zero());
        assert_eq!(request.gas_limit, web3::types::U256::from(6_000_000));
        assert_eq!(
            request.args_formatted(),
            vec!["0x0576a174D229E3cFA37253523E645A78A0C91B57".to_owned()]
        );
    }
}
