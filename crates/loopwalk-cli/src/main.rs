use loopwalk::{
    CycleEnumerator, EnumerateOptions, GraphStore, VertexLabel, Weight, io, unique_cycles,
};
use serde::Serialize;
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(loopwalk::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<loopwalk::Error> for CliError {
    fn from(value: loopwalk::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Show,
    Cycles,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    names: Option<Vec<char>>,
    json: bool,
    pretty: bool,
    unique: bool,
    limits: EnumerateOptions,
    verbosity: Verbosity,
}

fn usage() -> &'static str {
    "loopwalk-cli\n\
\n\
USAGE:\n\
  loopwalk-cli [show] [--json] [--pretty] [--names <chars>] [<path>|-]\n\
  loopwalk-cli cycles [--json] [--pretty] [--names <chars>] [--unique] [--max-steps <n>] [--max-cycles <n>] [<path>|-]\n\
\n\
OPTIONS:\n\
  -v, --verbose   debug logging on stderr\n\
  -q, --quiet     only log errors\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a vertex count followed by an N x N matrix of non-negative weights (0 = no edge).\n\
  - --names labels the vertices by character instead of index, e.g. --names abcdefj.\n\
  - cycles lists every simple cycle once per starting vertex; --unique drops rotations.\n\
  - RUST_LOG overrides the log level chosen by -v/-q.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            // `example` / `task` are the historical mode names.
            "show" | "example" => args.command = Command::Show,
            "cycles" | "task" => args.command = Command::Cycles,
            "--json" => args.json = true,
            "--pretty" => args.pretty = true,
            "--unique" => args.unique = true,
            "-v" | "--verbose" => args.verbosity = Verbosity::Verbose,
            "-q" | "--quiet" => args.verbosity = Verbosity::Quiet,
            "--names" => {
                let Some(names) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.names = Some(names.chars().collect());
            }
            "--max-steps" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.limits.max_steps =
                    Some(n.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--max-cycles" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.limits.max_cycles =
                    Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "-" => args.input = None,
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbosity {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(io::read_matrix_file(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;
    Ok(())
}

fn write_text(text: &str) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    Ok(())
}

#[derive(Serialize)]
struct VertexOut<'a, K> {
    index: usize,
    label: &'a K,
    mark: loopwalk::Mark,
}

#[derive(Serialize)]
struct EdgeOut<'a, K> {
    from: &'a K,
    to: &'a K,
    weight: Weight,
}

#[derive(Serialize)]
struct ShowOut<'a, K> {
    vertices: Vec<VertexOut<'a, K>>,
    edges: Vec<EdgeOut<'a, K>>,
    presence: Vec<Vec<u8>>,
    weights: Vec<Vec<Weight>>,
}

#[derive(Serialize)]
struct CyclesOut<'a, K> {
    count: usize,
    truncated: bool,
    steps: u64,
    cycles: Vec<Vec<&'a K>>,
}

fn show<K: VertexLabel + Serialize>(graph: &GraphStore<K>, args: &Args) -> Result<(), CliError> {
    let vertices: Vec<VertexOut<'_, K>> = graph
        .vertices()
        .map(|v| VertexOut {
            index: v.index,
            label: v.label,
            mark: v.mark,
        })
        .collect();
    let edges = graph
        .edges()
        .map(|e| {
            Ok(EdgeOut {
                from: graph.label_of(e.from)?,
                to: graph.label_of(e.to)?,
                weight: e.weight,
            })
        })
        .collect::<Result<Vec<_>, loopwalk::Error>>()?;

    if args.json {
        return write_json(
            &ShowOut {
                vertices,
                edges,
                presence: graph.presence_matrix(),
                weights: graph.weight_matrix(),
            },
            args.pretty,
        );
    }

    let mut out = String::from("Vertices:\n");
    for v in &vertices {
        out.push_str(&format!("  {}: {} (mark {})\n", v.index, v.label, v.mark));
    }
    out.push_str("Edges:\n");
    for e in &edges {
        out.push_str(&format!("  {} -> {} (weight {})\n", e.from, e.to, e.weight));
    }
    out.push_str("Adjacency matrix:\n");
    for row in graph.weight_matrix() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    write_text(&out)
}

fn cycles<K: VertexLabel + Serialize>(graph: &GraphStore<K>, args: &Args) -> Result<(), CliError> {
    let run = CycleEnumerator::new(graph).with_options(args.limits).run();
    if run.truncated {
        tracing::warn!(
            found = run.cycles.len(),
            steps = run.steps,
            "cycle enumeration stopped at a configured limit; output is partial"
        );
    }
    let found = if args.unique {
        unique_cycles(&run.cycles)
    } else {
        run.cycles
    };
    let labelled = found
        .iter()
        .map(|c| graph.cycle_labels(c))
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        return write_json(
            &CyclesOut {
                count: labelled.len(),
                truncated: run.truncated,
                steps: run.steps,
                cycles: labelled,
            },
            args.pretty,
        );
    }

    let mut out = format!("Cycle count: {}\n", labelled.len());
    for cycle in &labelled {
        let words: Vec<String> = cycle.iter().map(ToString::to_string).collect();
        out.push_str(&words.join(" "));
        out.push('\n');
    }
    write_text(&out)
}

fn dispatch<K: VertexLabel + Serialize>(graph: &GraphStore<K>, args: &Args) -> Result<(), CliError> {
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    match args.command {
        Command::Show => show(graph, args),
        Command::Cycles => cycles(graph, args),
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    match &args.names {
        Some(names) => {
            let graph = io::read_labeled_graph(&text, names.iter().copied())?;
            dispatch(&graph, &args)
        }
        None => {
            let graph = io::read_graph(&text)?;
            dispatch(&graph, &args)
        }
    }
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let args = match parse_args(&argv) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_logging(args.verbosity);

    if let Err(err) = run(args) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("{err}");
        std::process::exit(1);
    }
}
