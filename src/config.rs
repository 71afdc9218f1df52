/// Crate `config` provides solver's configuration and CLI.
use {std::path::PathBuf, structopt::StructOpt};

/// Configuration built from command line options
#[derive(Clone, Debug, StructOpt)]
#[structopt(name = "dplr", about)]
pub struct Config {
    /// CNF file in DIMACS format
    #[structopt(parse(from_os_str))]
    pub cnf_file: PathBuf,

    /// Disable coloring
    #[structopt(long = "no-color", short = "C")]
    pub no_color: bool,

    /// Disable any progress message
    #[structopt(long = "quiet", short = "q")]
    pub quiet_mode: bool,

    /// Result filename/stdout
    #[structopt(long = "result", short = "r", default_value = "", parse(from_os_str))]
    pub result_file: PathBuf,

    /// Writes one-line progress records instead of the live display
    #[structopt(long = "log", short = "l")]
    pub use_log: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            cnf_file: PathBuf::new(),
            no_color: true,
            quiet_mode: true,
            result_file: PathBuf::new(),
            use_log: false,
        }
    }
}

impl<T> From<T> for Config
where
    PathBuf: From<T>,
{
    fn from(path: T) -> Config {
        let f = PathBuf::from(path).into_os_string();
        Config::from_iter([std::ffi::OsString::from("dplr"), f].iter())
    }
}
