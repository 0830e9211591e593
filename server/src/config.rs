use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Where to listen and where the built front end lives.
#[derive(Parser, Clone, Debug)]
#[clap(about = "Serves the HBnB front end bundle")]
pub struct Config {
    #[clap(env = "HBNB_BIND", long, default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// Directory holding `index.html`, `pkg/` and `public/`
    #[clap(env = "HBNB_ROOT", long, default_value = "./client")]
    pub root: PathBuf,
}
