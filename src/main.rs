use std::process::ExitCode;

mod error;
mod layout;
mod pipeline;

fn main() -> ExitCode {
    let layout = layout::Layout::default_paths();
    println!(
        "🖼  iconsmith — generating platform icons in {}",
        layout.public_dir.display()
    );

    match pipeline::run(&layout) {
        Ok(summary) => {
            println!(
                "✅ Done: {} icons written, {} families skipped",
                summary.written.len(),
                summary.skipped.len()
            );
            // Nothing produced at all means both sources were missing
            if summary.written.is_empty() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(err) => {
            eprintln!("❌ Icon generation failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
