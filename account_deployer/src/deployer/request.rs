//!
//! The contract deployment request.
//!

///
/// The contract deployment request.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// The deployed contract name.
    pub contract_name: String,
    /// The sender address.
    pub from: web3::types::Address,
    /// The constructor arguments.
    pub args: Vec<web3::ethabi::Token>,
    /// The deployment gas limit.
    pub gas_limit: web3::types::U256,
    /// Whether the contract is deployed with CREATE2 through the deterministic factory.
    pub deterministic: bool,
    /// The CREATE2 salt.
    pub salt: web3::types::H256,
}

impl Request {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        contract_name: String,
        from: web3::types::Address,
        args: Vec<web3::ethabi::Token>,
        gas_limit: web3::types::U256,
    ) -> Self {
        Self {
            contract_name,
            from,
            args,
            gas_limit,
            deterministic: false,
            salt: web3::types::H256::zero(),
        }
    }

    ///
    /// Switches the request to the deterministic deployment.
    ///
    pub fn deterministic(mut self) -> Self {
        self.deterministic = true;
        self
    }

    ///
    /// Sets the CREATE2 salt.
    ///
    pub fn with_salt(mut self, salt: web3::types::H256) -> Self {
        self.salt = salt;
        self
    }

    ///
    /// Returns the deploy bytecode followed by the ABI-encoded constructor arguments.
    ///
    pub fn init_code(&self, bytecode: &[u8]) -> Vec<u8> {
        let mut init_code = bytecode.to_vec();
        init_code.extend(web3::ethabi::encode(self.args.as_slice()));
        init_code
    }

    ///
    /// Returns the constructor arguments in a human-readable form.
    ///
    pub fn args_formatted(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|token| match token {
                web3::ethabi::Token::Address(address) => {
                    crate::utils::address_as_checksummed(address)
                }
                web3::ethabi::Token::Uint(value) | web3::ethabi::Token::Int(value) => {
                    value.to_string()
                }
                token => token.to_string(),
            })
            .collect()
    }
}
