use std::error::Error;

use flowmax::Mode;

const SOLO_MINUTES: u32 = 30;
const PAIR_MINUTES: u32 = 26;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let (mode, minutes) = match args[..] {
        ["single"] => (Mode::Single, SOLO_MINUTES),
        ["dual"] => (Mode::Dual, PAIR_MINUTES),
        _ => return Err("must specify single|dual".into()),
    };
    let input = std::io::read_to_string(std::io::stdin().lock())?;
    Ok(println!("{}", flowmax::solve(mode, &input, minutes)?))
}
