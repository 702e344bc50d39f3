// Interactive six-option menu over a single GraphSession
use crate::{DotRenderer, Error, GeneratorConfig, GraphSession, Path, Result};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path as FsPath, PathBuf};
use tracing::warn;

const NO_GRAPH: &str = "No graph created yet. Please create a graph first.";

/// Line-oriented prompt/answer channel.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message` and read one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn report(&mut self, err: Error) -> Result<()> {
        self.say(format_args!("Error: {}", err))
    }

    /// Ask for the label of node `index` until a usable one is given.
    /// Falls back to the 1-based index once input runs out.
    fn read_label(&mut self, index: usize) -> String {
        loop {
            match self.prompt(&format!("Enter label for node {}: ", index + 1)) {
                Ok(Some(label)) if !label.is_empty() && !label.contains(char::is_whitespace) => {
                    return label;
                }
                Ok(Some(_)) => {
                    if self.say("Labels must be non-empty and contain no spaces.").is_err() {
                        return (index + 1).to_string();
                    }
                }
                Ok(None) | Err(_) => {
                    warn!(index, "no label entered, using node number");
                    return (index + 1).to_string();
                }
            }
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<R, W> {
    console: Console<R, W>,
    session: GraphSession,
    dot_output: Option<PathBuf>,
    seed: Option<u64>,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            console: Console::new(input, output),
            session: GraphSession::new(),
            dot_output: None,
            seed: None,
        }
    }

    /// Write visualisations to this file instead of the console.
    #[must_use]
    pub fn with_dot_output(mut self, path: Option<PathBuf>) -> Self {
        self.dot_output = path;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn session(&self) -> &GraphSession {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.console.output
    }

    /// Run until option 6 or end of input. Only console I/O failures are
    /// returned; every graph error is printed and the menu carries on.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.console.prompt("Enter your choice: ")? else {
                break;
            };
            if let Flow::Exit = self.dispatch(&choice)? {
                break;
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        self.console.say("\nMenu:")?;
        self.console.say("1. Create random graph")?;
        self.console.say("2. Visualize graph")?;
        self.console.say("3. Compute shortest path")?;
        self.console.say("4. Save graph to file")?;
        self.console.say("5. Import graph from file")?;
        self.console.say("6. Exit")
    }

    fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.create_random()?,
            "2" => self.visualize(None)?,
            "3" => self.find_path()?,
            "4" => self.save()?,
            "5" => self.import()?,
            "6" => return Ok(Flow::Exit),
            _ => self.console.say("Invalid choice. Please select a valid option.")?,
        }
        Ok(Flow::Continue)
    }

    fn create_random(&mut self) -> Result<()> {
        let Some(raw) = self.console.prompt("Enter the number of nodes: ")? else {
            return Ok(());
        };
        let node_count = match raw.parse::<i64>() {
            Ok(n) if n > 0 => n as usize,
            _ => return self.console.say("Error: Invalid number of nodes."),
        };

        let Some(raw) = self.console.prompt("Enter the probability (0-1): ")? else {
            return Ok(());
        };
        let probability = match raw.parse::<f64>() {
            Ok(p) if (0.0..=1.0).contains(&p) => p,
            _ => return self.console.say("Error: Invalid probability."),
        };

        let config = GeneratorConfig {
            node_count,
            probability,
            seed: self.seed,
        };
        let console = &mut self.console;
        let mut labels = |index: usize| console.read_label(index);
        match self.session.create_random(config, &mut labels) {
            Ok(graph) => {
                let nodes: Vec<&str> = graph.nodes().collect();
                self.console.say(format_args!("Nodes in the graph: {:?}", nodes))
            }
            Err(e) => self.console.report(e),
        }
    }

    fn visualize(&mut self, highlighted: Option<&Path>) -> Result<()> {
        if self.session.graph().is_none() {
            return self.console.say(NO_GRAPH);
        }
        match &self.dot_output {
            Some(path) => match render_to_file(&self.session, path, highlighted) {
                Ok(()) => self
                    .console
                    .say(format_args!("Graph written to {}", path.display())),
                Err(e) => self.console.report(e),
            },
            None => {
                let mut sink = DotRenderer::new(&mut self.console.output);
                match self.session.render(&mut sink, highlighted) {
                    Ok(()) => Ok(()),
                    Err(e) => self.console.report(e),
                }
            }
        }
    }

    fn find_path(&mut self) -> Result<()> {
        if self.session.graph().is_none() {
            return self.console.say(NO_GRAPH);
        }
        let Some(source) = self.console.prompt("Enter start node: ")? else {
            return Ok(());
        };
        let Some(target) = self.console.prompt("Enter target node: ")? else {
            return Ok(());
        };
        match self.session.shortest_path(&source, &target) {
            Ok(path) => {
                self.console.say(format_args!("Shortest path: {}", path))?;
                self.visualize(Some(&path))
            }
            Err(Error::NodeNotFound { missing }) => self.console.say(format_args!(
                "Error: Either start or target node is not in the graph (missing: {}).",
                missing.join(", ")
            )),
            Err(e) => self.console.report(e),
        }
    }

    fn save(&mut self) -> Result<()> {
        if self.session.graph().is_none() {
            return self.console.say(NO_GRAPH);
        }
        let Some(name) = self.console.prompt("Enter the filename to save the graph: ")? else {
            return Ok(());
        };
        match self.session.save(&name) {
            Ok(()) => self.console.say(format_args!("Graph saved to {}", name)),
            Err(e) => self.console.report(e),
        }
    }

    fn import(&mut self) -> Result<()> {
        let Some(name) = self
            .console
            .prompt("Enter the filename (ex. graph.txt) to import the graph from: ")?
        else {
            return Ok(());
        };
        match self.session.import(&name) {
            Ok(_) => self.console.say("Graph imported successfully."),
            Err(e) => self.console.report(e),
        }
    }
}

fn render_to_file(session: &GraphSession, path: &FsPath, highlighted: Option<&Path>) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::file_access(path, e))?;
    session.render(&mut DotRenderer::new(BufWriter::new(file)), highlighted)
}
