mod cli;

use cli::{Args, Command};
use std::path::{Path, PathBuf};
use std::process;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use vulnscope::adapters::outbound::console::StderrProgressReporter;
use vulnscope::adapters::outbound::filesystem::{FileSystemReader, FileSystemStateRepository};
use vulnscope::adapters::outbound::network::ScannerClient;
use vulnscope::application::dto::ScanRequest;
use vulnscope::application::factories::{FormatterFactory, PresenterFactory};
use vulnscope::application::read_models::AnalysisReadModel;
use vulnscope::application::use_cases::{
    CheckServerUseCase, DeepAnalysisUseCase, QuestionSessionController, ScanFileUseCase,
    ShowAnalysisUseCase,
};
use vulnscope::config::{discover_config, load_config_from_path, CliOverrides, Settings};
use vulnscope::ports::outbound::{OutputPresenter, ProgressReporter, ReportFormatter, ReportScope};
use vulnscope::scan_review::domain::SessionStatus;
use vulnscope::shared::error::ExitCode;
use vulnscope::shared::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

/// Diagnostics go to stderr; `RUST_LOG` applies unless `--verbose` is given
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,vulnscope=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config_file = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(Path::new("."))?,
    };

    let settings = Settings::resolve(
        CliOverrides {
            server_url: args.server.clone(),
            format: args.format,
            state_dir: args.state_dir.clone(),
            no_color: args.no_color || std::env::var_os("NO_COLOR").is_some(),
            fail_on_findings: args.command.fail_on_findings(),
        },
        config_file,
    )?;
    tracing::debug!(?settings, "settings resolved");

    let presenter = PresenterFactory::create(args.output.clone().into());

    match args.command {
        Command::Status => run_status(&settings, presenter.as_ref()).await,
        Command::Scan { file, .. } => run_scan(&settings, file, presenter.as_ref()).await,
        Command::Show { .. } => run_show(&settings, ReportScope::Full, presenter.as_ref()),
        Command::Diff => run_show(&settings, ReportScope::DiffOnly, presenter.as_ref()),
        Command::Deep { file } => run_deep(&settings, file, presenter.as_ref()).await,
        Command::Ask { question } => {
            run_ask(&settings, &question.join(" "), presenter.as_ref()).await
        }
    }
}

async fn run_status(settings: &Settings, presenter: &dyn OutputPresenter) -> Result<ExitCode> {
    let use_case = CheckServerUseCase::new(ScannerClient::new(&settings.server_url)?);
    let status = use_case.execute().await;

    presenter.present(&format!(
        "Server status ({}): {}",
        settings.server_url, status
    ))?;

    Ok(if status.is_connected() {
        ExitCode::Success
    } else {
        ExitCode::ApplicationError
    })
}

async fn run_scan(
    settings: &Settings,
    file: PathBuf,
    presenter: &dyn OutputPresenter,
) -> Result<ExitCode> {
    let mut use_case = ScanFileUseCase::new(
        FileSystemReader::new(settings.allowed_extensions.clone(), settings.max_file_size),
        ScannerClient::new(&settings.server_url)?,
        FileSystemStateRepository::new(settings.state_dir.clone()),
        StderrProgressReporter::new(),
    );

    let model = use_case.execute(ScanRequest::new(file)).await?;
    render_analysis(settings, &model, ReportScope::Full, presenter)?;
    Ok(findings_exit_code(settings, &model))
}

fn run_show(
    settings: &Settings,
    scope: ReportScope,
    presenter: &dyn OutputPresenter,
) -> Result<ExitCode> {
    let mut use_case =
        ShowAnalysisUseCase::new(FileSystemStateRepository::new(settings.state_dir.clone()));

    let model = use_case.execute()?;
    render_analysis(settings, &model, scope, presenter)?;

    Ok(match scope {
        ReportScope::Full => findings_exit_code(settings, &model),
        ReportScope::DiffOnly => ExitCode::Success,
    })
}

async fn run_deep(
    settings: &Settings,
    file: PathBuf,
    presenter: &dyn OutputPresenter,
) -> Result<ExitCode> {
    let use_case = DeepAnalysisUseCase::new(
        FileSystemReader::new(settings.allowed_extensions.clone(), settings.max_file_size),
        ScannerClient::new(&settings.server_url)?,
        FileSystemStateRepository::new(settings.state_dir.clone()),
        StderrProgressReporter::new(),
    );

    let response = use_case.execute(ScanRequest::new(file)).await?;
    presenter.present(&serde_json::to_string_pretty(&response)?)?;
    Ok(ExitCode::Success)
}

/// One question, or an interactive session when `question` is blank
async fn run_ask(
    settings: &Settings,
    question: &str,
    presenter: &dyn OutputPresenter,
) -> Result<ExitCode> {
    let mut controller = QuestionSessionController::new(ScannerClient::new(&settings.server_url)?);
    let formatter = FormatterFactory::create(settings.format, settings.color);
    let progress = StderrProgressReporter::new();

    if !question.trim().is_empty() {
        let status = ask_once(
            &mut controller,
            question,
            formatter.as_ref(),
            &progress,
            presenter,
        )
        .await?;
        return Ok(match status {
            Some(SessionStatus::Answered) => ExitCode::Success,
            _ => ExitCode::ApplicationError,
        });
    }

    progress.report("💬 Ask a security question. Type \"exit\" or press Ctrl-D to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        eprint!("\n❓ ");
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = ctrl_c() => None,
        };
        let Some(line) = line else { break };

        let question = line.trim();
        if question.eq_ignore_ascii_case("exit") || question.eq_ignore_ascii_case("quit") {
            break;
        }
        if question.is_empty() {
            continue;
        }

        ask_once(
            &mut controller,
            question,
            formatter.as_ref(),
            &progress,
            presenter,
        )
        .await?;
    }

    controller.close();
    Ok(ExitCode::Success)
}

/// Submits one question; Ctrl-C while waiting cancels it
///
/// Returns the final session status, or `None` when the question was refused.
async fn ask_once(
    controller: &mut QuestionSessionController<ScannerClient>,
    question: &str,
    formatter: &dyn ReportFormatter,
    progress: &StderrProgressReporter,
    presenter: &dyn OutputPresenter,
) -> Result<Option<SessionStatus>> {
    progress.start_waiting("Waiting for an answer (Ctrl-C to cancel)...");
    let submitted = controller.submit(question, ctrl_c()).await;
    progress.finish_waiting();

    match submitted {
        Err(e) => {
            progress.report_error(&format!("⚠️  {}", e));
            Ok(None)
        }
        Ok(SessionStatus::Idle) => {
            progress.report_error("Question cancelled.");
            Ok(Some(SessionStatus::Idle))
        }
        Ok(status) => {
            presenter.present(&formatter.format_answer(controller.session())?)?;
            Ok(Some(status))
        }
    }
}

/// Completes on Ctrl-C; never completes if the handler cannot be installed
async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

fn render_analysis(
    settings: &Settings,
    model: &AnalysisReadModel,
    scope: ReportScope,
    presenter: &dyn OutputPresenter,
) -> Result<()> {
    let progress = StderrProgressReporter::new();
    progress.report(FormatterFactory::progress_message(settings.format));

    let formatter = FormatterFactory::create(settings.format, settings.color);
    presenter.present(&formatter.format_analysis(model, scope)?)
}

fn findings_exit_code(settings: &Settings, model: &AnalysisReadModel) -> ExitCode {
    if settings.fail_on_findings && model.has_vulnerabilities() {
        ExitCode::VulnerabilitiesDetected
    } else {
        ExitCode::Success
    }
}
