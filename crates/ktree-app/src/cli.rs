use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "ktree", version, about = "Browse Kubernetes resources as a tree of columns")]
pub struct CliArgs {
    /// Kubeconfig context to use for this session
    #[arg(long)]
    pub context: Option<String>,

    /// Namespace to pre-select
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// Resource kind to pre-select, e.g. Pods or svc
    #[arg(short = 't', long = "type", value_name = "KIND")]
    pub kind: Option<String>,

    /// Write debug logs to debug.log in the current directory
    #[arg(long)]
    pub debug: bool,

    /// Configuration file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
