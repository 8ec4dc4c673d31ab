use contactbook::core::cli::CliPaths;
use contactbook::core::context::AppContext;
use contactbook::logging::LogTarget;
use contactbook::prompter::flows::main_flow::MainFlow;
use contactbook::prompter::prompter::Prompter;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut ctx = match AppContext::new_with_paths(paths.config_path, paths.logs_dir) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let logger = ctx.logger.clone();
    let flow = MainFlow::new(&mut ctx);

    if let Err(err) = Prompter::new().run(flow) {
        logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
