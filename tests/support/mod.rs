use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for pathrider
pub fn pathrider() -> Command {
    cargo_bin_cmd!("pathrider")
}

/// Get a Command for pathrider running inside `dir`, isolated from the
/// user's configuration and logging environment
pub fn pathrider_in(dir: &Path) -> Command {
    let mut cmd = pathrider();
    cmd.current_dir(dir)
        .env("PATHRIDER_CONFIG_DIR", dir.join("config"))
        .env_remove("RUST_LOG")
        .env_remove("PATHRIDER_LOG");
    cmd
}

/// Write a file under `dir` and return its path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Write a SIF network from `(source, interaction, target)` triples
#[allow(dead_code)]
pub fn write_network(dir: &Path, name: &str, triples: &[(&str, &str, &str)]) -> PathBuf {
    let content: String = triples
        .iter()
        .map(|(from, label, to)| format!("{}\t{}\t{}\n", from, label, to))
        .collect();
    write_file(dir, name, &content)
}

/// Write a node list, one node per line
pub fn write_nodes(dir: &Path, name: &str, nodes: &[&str]) -> PathBuf {
    let mut content = nodes.join("\n");
    content.push('\n');
    write_file(dir, name, &content)
}

/// Read an output file as sorted lines
#[allow(dead_code)]
pub fn sorted_lines(path: &Path) -> Vec<String> {
    let mut lines: Vec<String> = fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

/// The example network: A->B, B->C, B->D, D->C, C->E
pub fn example_network(dir: &Path) -> PathBuf {
    write_network(
        dir,
        "net.sif",
        &[
            ("A", "activation", "B"),
            ("B", "activation", "C"),
            ("B", "inhibition", "D"),
            ("D", "activation", "C"),
            ("C", "binding", "E"),
        ],
    )
}
