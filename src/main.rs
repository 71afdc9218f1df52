// Main module for the binary
use {
    dplr::{
        config::Config,
        solver::{Certificate, SatSolverIF, Solver},
        state::StateIF,
    },
    std::{
        fs::File,
        io::{BufWriter, Write},
        path::PathBuf,
        process::exit,
    },
    structopt::StructOpt,
};

fn main() {
    let config = Config::from_args();
    if !config.cnf_file.exists() {
        eprintln!(
            "FATAL ERROR: cannot open file {}.",
            config.cnf_file.to_string_lossy()
        );
        exit(1);
    }
    let mut s = match Solver::build(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("FATAL ERROR: {e}.");
            exit(1);
        }
    };
    let res = s.solve();
    match res {
        Ok(Certificate::SAT(ref v)) => {
            save_result(&s, Some(v));
            s.state.report(&s.asg, &s.cdb, "SAT");
        }
        Ok(Certificate::UNSAT) => {
            save_result(&s, None);
            s.state.report(&s.asg, &s.cdb, "UNSAT");
        }
        Err(e) => {
            eprintln!("FATAL ERROR: {e}.");
            exit(1);
        }
    }
    exit(0);
}

/// dump the model (or its absence) to the result file.
fn save_result(s: &Solver, model: Option<&Vec<i32>>) {
    let config = &s.state.config;
    let result = if config.result_file.as_os_str().is_empty() {
        PathBuf::from(format!(
            ".ans_{}",
            config
                .cnf_file
                .file_name()
                .map_or("--".to_string(), |f| f.to_string_lossy().into_owned()),
        ))
    } else {
        config.result_file.clone()
    };
    let Ok(out) = File::create(&result) else {
        eprintln!("cannot save the result to {}", result.to_string_lossy());
        return;
    };
    let mut buf = BufWriter::new(out);
    let outcome = match model {
        Some(v) => {
            let mut line = v
                .iter()
                .map(|l| format!("{l}"))
                .collect::<Vec<String>>()
                .join(" ");
            line.push_str(" 0\n");
            buf.write_all(line.as_bytes())
        }
        None => buf.write_all(b"[]\n"),
    };
    if let Err(why) = outcome {
        eprintln!("failed to save to {}: {why:?}", result.to_string_lossy());
    }
    if !config.quiet_mode {
        println!(
            "{} variables, the answer was dumped to {}.",
            s.asg.num_vars,
            result.to_string_lossy()
        );
    }
}
