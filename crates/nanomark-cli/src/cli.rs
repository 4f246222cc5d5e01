use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "nanomark")]
#[command(author, version)]
#[command(about = "Converts nanomark markup to an HTML fragment")]
#[command(after_help = "\
EXAMPLES:

  nanomark post.txt > post.html
  cat post.txt | nanomark --xhtml
  nanomark --no-links --id-prefix post-42 post.txt

Settings are read from ~/.config/nanomark/config.toml unless --config is given.
Command-line flags override the config file.")]
pub struct Cli {
    /// Input file, or `-` for stdin
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Emit XHTML instead of HTML5
    #[arg(long)]
    pub xhtml: bool,

    /// Break lines only where they end in two spaces
    #[arg(long)]
    pub hard_breaks: bool,

    /// Render links as their plain label
    #[arg(long)]
    pub no_links: bool,

    /// Prefix for ids generated by embedded media
    #[arg(long, value_name = "PREFIX")]
    pub id_prefix: Option<String>,

    /// Path to a configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The input file, or `None` when reading stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.file.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
