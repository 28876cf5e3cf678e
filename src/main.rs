use bannersync::{
    cli::{Args, Command},
    error::ErrorSeverity,
};
use std::process;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Create command from arguments
    let command = Command::from_args(args);

    // Run the command and get exit code
    let exit_code = run_command(command);

    // Exit with appropriate code
    process::exit(exit_code);
}

/// Run the command with proper error handling
fn run_command(command: Command) -> i32 {
    match command.execute() {
        Ok(_) => 0,
        Err(err) => {
            // Print user-friendly error message
            eprintln!("\nError: {}", err.user_message());

            // Return appropriate exit code based on error severity
            let exit_code = match err.severity() {
                ErrorSeverity::Warning => 0,  // Warnings don't cause failure
                ErrorSeverity::Error => 1,    // Regular errors
                ErrorSeverity::Critical => 2, // Critical errors
            };

            if exit_code > 0 {
                eprintln!("Exiting with code {} due to {}", exit_code, err.severity());
            }

            exit_code
        }
    }
}
