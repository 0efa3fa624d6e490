use docnarrate::cli::{self, NarrateCli};
use docnarrate::{narrator, output};
use std::process::ExitCode;

fn main() -> ExitCode {
    docnarrate::logging::init();

    let cli = match cli::parse_or_exit::<NarrateCli>(NarrateCli::USAGE) {
        Ok(cli) => cli,
        Err(code) => return code,
    };

    let result = narrator::narrate(cli.request(), &cli.synthesizer());
    if let Err(ref failure) = result {
        tracing::info!(kind = ?failure.kind(), "narration failed: {}", failure);
    }
    cli::report(output::narration_json(&result));

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
