//!
//! The CREATE2 deploy address predictor.
//!

///
/// The CREATE2 deploy address predictor.
///
#[derive(Debug, Clone, Copy)]
pub struct AddressPredictor {
    /// The deploying contract address.
    deployer: web3::types::Address,
}

impl AddressPredictor {
    /// The CREATE2 hashing preimage prefix.
    pub const PREFIX: u8 = 0xff;

    /// The Ethereum address byte length.
    pub const ADDRESS_LENGTH: usize = 20;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(deployer: web3::types::Address) -> Self {
        Self { deployer }
    }

    ///
    /// Returns the address of the contract deployed by the deployer with the salt and init code.
    ///
    pub fn predict(&self, salt: &web3::types::H256, init_code: &[u8]) -> web3::types::Address {
        let mut preimage = Vec::with_capacity(1 + Self::ADDRESS_LENGTH + 32 + 32);
        preimage.push(Self::PREFIX);
        preimage.extend_from_slice(self.deployer.as_bytes());
        preimage.extend_from_slice(salt.as_bytes());
        preimage.extend_from_slice(&crate::utils::keccak256(init_code));

        let hash = crate::utils::keccak256(preimage.as_slice());
        web3::types::Address::from_slice(&hash[hash.len() - Self::ADDRESS_LENGTH..])
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::AddressPredictor;

    fn address(value: &str) -> web3::types::Address {
        web3::types::Address::from_str(value).expect("Always valid")
    }

    #[test]
    fn zero_deployer() {
        let predictor = AddressPredictor::new(web3::types::Address::zero());

        let predicted = predictor.predict(&web3::types::H256::zero(), &[0x00]);

        assert_eq!(predicted, address("4d1a2e2bb4f88f0250f26ffff098b0b30b26bf38"));
    }

    #[test]
    fn nonzero_deployer() {
        let predictor = AddressPredictor::new(address("deadbeef00000000000000000000000000000000"));

        let predicted = predictor.predict(&web3::types::H256::zero(), &[0x00]);

        assert_eq!(predicted, address("b928f69bb1d91cd65274e3c79d8986362984fda3"));
    }

    #[test]
    fn depends_on_init_code() {
        let predictor = AddressPredictor::new(web3::types::Address::zero());
        let salt = web3::types::H256::zero();

        assert_eq!(
            predictor.predict(&salt, &[0x60, 0x80]),
            predictor.predict(&salt, &[0x60, 0x80])
        );
        assert_ne!(
            predictor.predict(&salt, &[0x60, 0x80]),
            predictor.predict(&salt, &[0x60, 0x81])
        );
    }
}
