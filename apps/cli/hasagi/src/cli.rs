//! Command line definition.

use models::{EventType, HttpMethod};

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "hasagi",
    version,
    about = "Command line access to the League of Legends client (LCU) API",
    arg_required_else_help = true
)]
pub struct Cli {
    #[arg(long, global = true, value_name = "FILE", help = "Config file (default: <config dir>/hasagi/config.toml)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Log more (repeat for debug and trace)")]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send one HTTP request to the LCU
    Request(RequestArgs),
    /// Print LCU websocket events as they arrive
    Listen(ListenArgs),
    /// Export the LCU API schema
    Schema(SchemaArgs),
    /// Print the LCU base URL and Authorization header
    Credentials,
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    #[arg(value_parser = parse_method, help = "HTTP method, e.g. GET or post")]
    pub method: HttpMethod,

    #[arg(help = "Request path, e.g. /lol-summoner/v1/current-summoner")]
    pub path: String,

    #[arg(short, long, value_name = "JSON", help = "JSON request body")]
    pub body: Option<String>,

    #[arg(short, long, value_name = "JSON", help = "Query parameters as a JSON object")]
    pub query: Option<String>,

    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Write the result as JSON to a file or directory (default: current directory)"
    )]
    pub out: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListenArgs {
    #[arg(short, long, conflicts_with = "name", help = "Only events for this URI, e.g. /lol-gameflow/v1/session")]
    pub path: Option<String>,

    #[arg(short, long, help = "Subscribe to this event name instead of OnJsonApiEvent")]
    pub name: Option<String>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        ignore_case = true,
        num_args = 1..,
        help = "Only these event types"
    )]
    pub types: Vec<EventTypeArg>,

    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Append events to a file, or to events.json in a directory"
    )]
    pub out: Option<String>,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    #[arg(
        short,
        long,
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Write TypeScript declarations"
    )]
    pub typescript: Option<String>,

    #[arg(long, value_name = "NAMESPACE", help = "Wrap TypeScript declarations in a global namespace")]
    pub tsnamespace: Option<String>,

    #[arg(
        short,
        long,
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Write an OpenAPI document"
    )]
    pub swagger: Option<String>,

    #[arg(
        short,
        long,
        value_name = "DIR",
        num_args = 0..=1,
        default_missing_value = "",
        help = "Write the raw and extended /help documents"
    )]
    pub raw: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "PascalCase")]
pub enum EventTypeArg {
    Create,
    Update,
    Delete,
}

impl From<EventTypeArg> for EventType {
    fn from(arg: EventTypeArg) -> Self {
        match arg {
            EventTypeArg::Create => EventType::Create,
            EventTypeArg::Update => EventType::Update,
            EventTypeArg::Delete => EventType::Delete,
        }
    }
}

fn parse_method(value: &str) -> Result<HttpMethod, String> {
    value
        .parse()
        .map_err(|_| format!("unsupported HTTP method '{value}'"))
}
