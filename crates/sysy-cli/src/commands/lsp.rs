use std::process::exit;

pub struct LspArgs {
    pub port: Option<u16>,
}

pub fn run(args: LspArgs) {
    let result = match args.port {
        Some(port) => sysy_lsp::run_tcp(port),
        None => sysy_lsp::run_stdio(),
    };
    match result {
        Ok(status) => exit(status.code()),
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }
}
