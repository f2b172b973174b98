use clap::Parser as CliParser;

#[derive(CliParser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The values to append, in order
    #[arg(default_values_t = vec![10, 20, 30])]
    pub values: Vec<i64>,
    /// The text printed before the chain
    #[arg(short, long, default_value = "Liste chaînée : ")]
    pub label: String,
}
