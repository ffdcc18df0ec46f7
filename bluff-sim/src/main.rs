use bluff_sim::{Circuit, Gate, StatevectorSimulator};
use clap::Parser;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

/// Runs a line-oriented gate program on the statevector simulator.
///
/// One operation per line: `h 0`, `x 1`, `cx 0 1`, ... Lines starting with
/// `#` are comments. An optional `qubits N` line fixes the register width;
/// otherwise it is inferred from the highest qubit index used.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The gate program to run. If not provided, reads from stdin.
    #[arg(short, long)]
    input_file: Option<PathBuf>,

    /// The output file to write JSON results to. If not provided, writes to stdout.
    #[arg(short, long)]
    output_file: Option<PathBuf>,

    /// Number of measurement shots to sample from the final state.
    #[arg(short, long, default_value_t = 1024)]
    shots: u32,
}

#[derive(Serialize)]
struct RunOutput {
    num_qubits: usize,
    statevector: bluff_sim::StateVector,
    counts: HashMap<String, u32>,
}

fn parse_program(input: &str) -> Result<Circuit, String> {
    let mut declared_qubits = None;
    let mut ops = Vec::new();

    for (lineno, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split_whitespace();
        let op = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<usize> = parts
            .map(|p| {
                p.parse::<usize>()
                    .map_err(|_| format!("line {}: bad qubit index '{p}'", lineno + 1))
            })
            .collect::<Result<_, _>>()?;

        let gate = match (op.as_str(), args.as_slice()) {
            ("qubits", [n]) => {
                declared_qubits = Some(*n);
                continue;
            }
            ("i", [q]) => Gate::I { qubit: *q },
            ("h", [q]) => Gate::H { qubit: *q },
            ("x", [q]) => Gate::X { qubit: *q },
            ("y", [q]) => Gate::Y { qubit: *q },
            ("z", [q]) => Gate::Z { qubit: *q },
            ("cx", [c, t]) => Gate::CX {
                control: *c,
                target: *t,
            },
            _ => return Err(format!("line {}: unrecognized operation '{line}'", lineno + 1)),
        };
        ops.push(gate);
    }

    let inferred = ops.iter().map(|g| g.max_qubit() + 1).max().unwrap_or(1);
    let num_qubits = declared_qubits.unwrap_or(inferred);

    let mut circuit = Circuit::new(num_qubits);
    for gate in ops {
        circuit.push(gate).map_err(|e| e.to_string())?;
    }
    Ok(circuit)
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut program = String::new();
    if let Some(input_path) = cli.input_file {
        program = fs::read_to_string(input_path)?;
    } else {
        io::stdin().read_to_string(&mut program)?;
    }

    let circuit = parse_program(&program).map_err(io::Error::other)?;

    let mut sim = StatevectorSimulator::new(circuit.num_qubits).map_err(io::Error::other)?;
    sim.run(&circuit).map_err(io::Error::other)?;
    let counts = sim.sample(cli.shots).map_err(io::Error::other)?;

    let output = RunOutput {
        num_qubits: circuit.num_qubits,
        statevector: sim.statevector().clone(),
        counts,
    };
    let json_output =
        serde_json::to_string_pretty(&output).map_err(io::Error::other)?;

    if let Some(output_path) = cli.output_file {
        let file = File::create(output_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_output.as_bytes())?;
        writer.write_all(b"\n")?;
    } else {
        println!("{json_output}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_program_with_comments_and_header() {
        let circuit = parse_program(
            "# bell pair\nqubits 2\nh 0\ncx 0 1\n",
        )
        .unwrap();
        assert_eq!(circuit.num_qubits, 2);
        assert_eq!(circuit.gates.len(), 2);
        assert_eq!(circuit.gates[1], Gate::CX { control: 0, target: 1 });
    }

    #[test]
    fn infers_register_width_from_indices() {
        let circuit = parse_program("x 2\n").unwrap();
        assert_eq!(circuit.num_qubits, 3);
    }

    #[test]
    fn rejects_unknown_operations() {
        assert!(parse_program("teleport 0\n").is_err());
        assert!(parse_program("h zero\n").is_err());
    }
}
