use sysy_syntax::Parse;

use super::parse_input;
use super::source::SourceInput;

pub struct TreeArgs {
    pub input: SourceInput,
    pub raw: bool,
    pub spans: bool,
}

pub fn run(args: TreeArgs) {
    let (_, parse) = parse_input(&args.input);
    print!("{}", render(&parse, args.raw, args.spans));
}

pub fn render(parse: &Parse, raw: bool, spans: bool) -> String {
    parse.printer().with_trivia(raw).with_spans(spans).dump()
}
