//! One-shot unit conversion from the command line
//! Usage: convert <category> <from_unit> <to_unit> <value> [--remote [URL]]
//!
//! Without `--remote` the conversion runs in-process. With it, the request is
//! sent to URL, or to `UNIT_CONVERTER_URL` when no URL is given.

use unit_converter::client::ConversionClient;
use unit_converter::config::REMOTE_URL_VAR;
use unit_converter::conversion;

const USAGE: &str = "Usage: convert <category> <from_unit> <to_unit> <value> [--remote [URL]]";

/// Where the conversion runs
#[derive(Debug, PartialEq)]
enum Target {
    Local,
    /// Remote service; `None` means fall back to the environment
    Remote(Option<String>),
}

#[derive(Debug, PartialEq)]
struct Invocation {
    category: String,
    from_unit: String,
    to_unit: String,
    value: f64,
    target: Target,
}

fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let (positional, target) = match args.iter().position(|a| a == "--remote") {
        Some(pos) => {
            let url = match &args[pos + 1..] {
                [] => None,
                [url] => Some(url.clone()),
                _ => return Err(USAGE.to_string()),
            };
            (&args[..pos], Target::Remote(url))
        }
        None => (args, Target::Local),
    };

    let [category, from_unit, to_unit, value] = positional else {
        return Err(USAGE.to_string());
    };

    let value = value
        .parse()
        .map_err(|_| format!("Not a number: '{}'", value))?;

    Ok(Invocation {
        category: category.clone(),
        from_unit: from_unit.clone(),
        to_unit: to_unit.clone(),
        value,
        target,
    })
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = parse_args(&args)?;

    let result = match invocation.target {
        Target::Local => conversion::convert_named(
            &invocation.category,
            &invocation.from_unit,
            &invocation.to_unit,
            invocation.value,
        )?,
        Target::Remote(url) => {
            let url = url
                .or_else(|| std::env::var(REMOTE_URL_VAR).ok())
                .ok_or_else(|| format!("--remote needs a URL or {} to be set", REMOTE_URL_VAR))?;
            ConversionClient::new(url)
                .convert(
                    &invocation.category,
                    &invocation.from_unit,
                    &invocation.to_unit,
                    invocation.value,
                )
                .await?
        }
    };

    println!("{}", result);

    Ok(())
}
