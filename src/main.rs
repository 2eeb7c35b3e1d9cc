pub const HELP: &str = "svg2glyph

USAGE:
    svg2glyph [OPTIONS] [INPUT]

OPTIONS:
    -h, --help\t\tPrint this message
    -p, --precision N\tRound transformed coordinates to N decimals

Reads an SVG file (or stdin) and prints a single-path SVG document.";

fn main() {
    fn inner() -> Result<(), Box<dyn std::error::Error>> {
        env_logger::init();

        let mut input = None;
        let mut options = svg2glyph::Options::default();

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    println!("{}", HELP);
                    return Ok(());
                }
                "-p" | "--precision" => {
                    let value = args.next().ok_or("Missing value for --precision")?;
                    options.precision = Some(value.parse()?);
                }
                _ => {
                    input = Some(arg);
                }
            }
        }

        let mut input = if let Some(input) = input {
            input
        } else {
            let mut buffer = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
            buffer
        };

        if std::path::Path::new(&input).exists() {
            input = std::fs::read_to_string(&input)?;
        }

        let result = match svg2glyph::convert_with(&input, &options).into_result() {
            Ok(result) => result,
            Err(e) if !matches!(e, svg2glyph::Error::Sizing(_)) => {
                return Err(format!("{} {}", svg2glyph::INVALID_IMAGE_MESSAGE, e).into());
            }
            Err(e) => return Err(e.into()),
        };

        if !result.ignored_tags.is_empty() || !result.ignored_attrs.is_empty() {
            let skipped: Vec<&str> = result
                .ignored_tags
                .iter()
                .chain(result.ignored_attrs.iter())
                .map(String::as_str)
                .collect();
            eprintln!("{}{}", svg2glyph::REMOVE_TAGS_WARNING, skipped.join(", "));
        } else if !result.guaranteed {
            eprintln!("{}", svg2glyph::MERGE_PATHS_WARNING);
        }

        println!("{}", svg2glyph::to_svg(&result)?);

        Ok(())
    }

    if let Err(e) = inner() {
        eprintln!("{}", e);
        std::process::exit(2);
    }
}
