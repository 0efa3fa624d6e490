use docnarrate::cli::{self, ExtractCli};
use docnarrate::{extractor, output};
use std::process::ExitCode;

fn main() -> ExitCode {
    docnarrate::logging::init();

    let cli = match cli::parse_or_exit::<ExtractCli>(ExtractCli::USAGE) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let result = extractor::extract(cli.request(), &cli.readers());
    if let Err(ref failure) = result {
        tracing::info!(kind = ?failure.kind(), "extraction failed: {}", failure);
    }
    cli::report(output::extraction_json(&result));

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
