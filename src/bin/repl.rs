use clap::Parser;
use dice_expr::{
    command, config::DEFAULT_MAX_ROLLS, RollConfig, RollContext, Roller, SequenceRoller, UInt,
};
use rand::{rngs::StdRng, SeedableRng};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(version, about = "Roll dice expressions such as 2d6+3, (1d20+5)*2 or 4d6kh")]
struct Cli {
    /// Evaluate one expression and exit instead of reading stdin
    #[arg(short, long)]
    expr: Option<String>,

    /// Most dice a single expression may roll; 0 removes the limit
    #[arg(long, default_value_t = DEFAULT_MAX_ROLLS)]
    max_rolls: usize,

    /// Seed the generator for reproducible rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Replay these comma-separated rolls instead of drawing random ones
    #[arg(long, value_delimiter = ',', conflicts_with = "seed")]
    rolls: Vec<UInt>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let max_rolls = if cli.max_rolls == 0 {
        None
    } else {
        Some(cli.max_rolls)
    };
    let config = RollConfig::default().with_max_rolls(max_rolls);

    if !cli.rolls.is_empty() {
        let roller = SequenceRoller::new(cli.rolls).ok_or("--rolls values must be at least 1")?;
        log::info!("replaying recorded rolls");
        return run(cli.expr, RollContext::new(config, roller));
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!("seed: {:?}", cli.seed);
    run(cli.expr, RollContext::new(config, rng))
}

fn run<R: Roller>(
    expr: Option<String>,
    mut ctx: RollContext<R>,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("max rolls: {:?}", ctx.config().max_rolls);

    if let Some(expr) = expr {
        println!("{}", command::respond(&expr, &mut ctx));
        return Ok(());
    }

    let stdin = io::stdin();
    print!("> ");
    io::stdout().flush()?;
    for line in stdin.lock().lines() {
        println!("{}", command::respond(&line?, &mut ctx));
        print!("> ");
        io::stdout().flush()?;
    }
    println!();
    Ok(())
}
