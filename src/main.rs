use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use go_subtest::cli::{self, AddArgs, Command, GotoArgs, OutputMode, TargetArgs};
use go_subtest::commands::{
    self, reveal_best_effort, AddOutcome, ClipboardSink, CommandClipboard, EditorCommand,
    PrintLocation, Request, Reveal, StdoutClipboard,
};
use go_subtest::document::Document;
use go_subtest::logging::{self, Verbosity};
use go_subtest::symbols::GoSymbolProvider;
use go_subtest::workspace::{Settings, Workspace};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    match &args.command {
        Command::AddSubtest(add) => run_add(add, args.quiet),
        Command::GotoSubtest(goto) => run_goto(goto),
    }
}

struct Session {
    document: Document,
    workspace: Workspace,
    settings: Settings,
}

impl Session {
    fn open(target: &TargetArgs) -> Result<Self> {
        let document = Document::open(&target.file)?;
        commands::ensure_go_document(&document)?;
        let workspace = Workspace::discover(target.workspace.as_deref(), &target.file)?;
        let settings = workspace.settings();
        Ok(Self {
            document,
            workspace,
            settings,
        })
    }

    fn request(&self, target: &TargetArgs) -> Request<'_> {
        Request {
            workspace: &self.workspace,
            document: &self.document,
            cursor: target.cursor(&self.document),
            test_prefix: &self.settings.test_prefix,
        }
    }

    fn revealer(&self, target: &TargetArgs) -> Box<dyn Reveal> {
        if !target.open {
            return Box::new(PrintLocation);
        }
        let command = target
            .editor
            .as_deref()
            .or(self.settings.editor_command.as_deref());
        Box::new(command.and_then(EditorCommand::parse).unwrap_or_default())
    }

    fn clipboard(&self, add: &AddArgs) -> Box<dyn ClipboardSink> {
        let command = add
            .clipboard_command
            .as_deref()
            .or(self.settings.clipboard_command.as_deref());
        if let Some(clipboard) = command.and_then(CommandClipboard::parse) {
            return Box::new(clipboard);
        }
        Box::new(StdoutClipboard)
    }
}

fn run_add(add: &AddArgs, quiet: bool) -> Result<()> {
    let session = Session::open(&add.target)?;
    let output_mode = OutputMode::resolve(add.output_mode, &session.settings);
    let provider = GoSymbolProvider::new()?;
    let clipboard = session.clipboard(add);

    let outcome = commands::add_subtest(
        &session.request(&add.target),
        &provider,
        output_mode,
        clipboard.as_ref(),
    )?;

    if !quiet {
        match &outcome {
            AddOutcome::Added { identifier, .. } => eprintln!("Added {identifier} to launch.json"),
            AddOutcome::AlreadyExists { identifier, .. } => {
                eprintln!("launch.json config already exists: {identifier}")
            }
            AddOutcome::Copied { identifier, .. } => {
                eprintln!("Copied launch configuration for {identifier}")
            }
        }
    }

    if let Some(location) = outcome.location() {
        reveal_best_effort(session.revealer(&add.target).as_ref(), location);
    }
    Ok(())
}

fn run_goto(goto: &GotoArgs) -> Result<()> {
    let session = Session::open(&goto.target)?;
    let provider = GoSymbolProvider::new()?;

    let location = commands::goto_subtest(&session.request(&goto.target), &provider)?;
    reveal_best_effort(session.revealer(&goto.target).as_ref(), &location);
    Ok(())
}
