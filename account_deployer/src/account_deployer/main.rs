//!
//! The account deployer executable.
//!

pub(crate) mod arguments;

use clap::Parser;

use account_deployer::Chain;

use self::arguments::Arguments;
use self::arguments::Command;

///
/// The application entry point.
///
fn main() {
    let exit_code = match main_inner(Arguments::parse()) {
        Ok(()) => account_deployer::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            account_deployer::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let console = account_deployer::Console::new(arguments.verbose, arguments.quiet);

    if account_deployer::Environment::load_dotenv(arguments.root.as_path())? {
        console.detail(
            "Loaded",
            account_deployer::Environment::DOTENV_FILE_NAME,
        );
    }
    let environment = account_deployer::Environment::from_process();
    let config = account_deployer::Config::new(arguments.root.as_path(), &environment);

    match arguments.command {
        Command::Compile { no_download } => {
            account_deployer::Project::new(&config, console).compile(!no_download)?;
        }
        Command::Deploy {
            network,
            no_compile,
            no_download,
        } => {
            console.status(
                "Starting",
                format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            );
            if !no_compile {
                account_deployer::Project::new(&config, console).compile(!no_download)?;
            }

            let network = config.network(network)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .map_err(|error| anyhow::anyhow!("Async runtime building error: {error}"))?;
            runtime.block_on(deploy(&config, network, console))?;
        }
        Command::Config { network } => {
            let json = match network {
                Some(name) => serde_json::to_string_pretty(config.network(name)?)?,
                None => serde_json::to_string_pretty(&config)?,
            };
            println!("{json}");
        }
    }

    Ok(())
}

///
/// Connects to the network and runs the deployment scripts.
///
async fn deploy(
    config: &account_deployer::Config,
    network: &account_deployer::Network,
    console: account_deployer::Console,
) -> anyhow::Result<()> {
    console.status("Connecting", format!("to `{}`", network.name));
    let chain = account_deployer::HttpChain::connect(network).await?;
    console.detail(
        "Signer",
        format!("{:?} on chain {}", chain.signer(), chain.chain_id()),
    );

    let results = account_deployer::scripts::Runner::new(
        config,
        network.name.as_str(),
        &chain,
        console,
    )
    .run(&account_deployer::scripts::all())
    .await?;

    console.status(
        "Finished",
        format!("{} script(s) on `{}`", results.len(), network.name),
    );
    Ok(())
}
