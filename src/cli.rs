use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "echo-tool", author, version, about = "JSON-in/JSON-out echo tool for CLI tool-calling", long_about = None)]
pub struct Cli {
    /// JSON-encoded argument object, e.g. '{"text": "hello"}'
    pub args: Option<String>,

    /// Tool to invoke
    #[arg(long, default_value = "echo")]
    pub tool: String,

    /// List registered tools and exit
    #[arg(long)]
    pub list: bool,

    /// Print the selected tool's spec as JSON and exit
    #[arg(long)]
    pub spec: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_args_and_defaults() {
        let cli = <Cli as Parser>::try_parse_from(["echo-tool", r#"{"text":"hi"}"#]).unwrap();
        assert_eq!(cli.args.as_deref(), Some(r#"{"text":"hi"}"#));
        assert_eq!(cli.tool, "echo");
        assert!(!cli.list);
        assert!(!cli.spec);
    }

    #[test]
    fn no_argument_is_accepted() {
        let cli = <Cli as Parser>::try_parse_from(["echo-tool"]).unwrap();
        assert!(cli.args.is_none());
    }
}
