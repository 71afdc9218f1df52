//! Crate `state` is a collection of internal data, the progress display
//! and the final report.
use {
    crate::{
        assign::{AssignIF, AssignStack},
        cdb::ClauseDB,
        config::Config,
        types::*,
    },
    std::{
        fmt,
        io::{stdout, Write},
        ops::{Index, IndexMut},
        time::Instant,
    },
};

/// stat index.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stat {
    /// the number of conflicts
    Conflict = 0,
    /// the number of decisions
    Decision,
    /// the number of unit propagations, counted when a unit is detected
    Propagation,
    /// don't use this dummy (sentinel at the tail).
    EndOfStatIndex,
}

/// Data storage for [`Solver`](`crate::solver::Solver`).
#[derive(Clone, Debug)]
pub struct State {
    /// solver becoming inconsistent while loading means UNSAT.
    pub ok: bool,
    /// collection of statistics data
    pub stats: [usize; Stat::EndOfStatIndex as usize],
    /// problem description
    pub target: CNFDescription,
    /// the configuration in force
    pub config: Config,
    /// the instant the solver was built
    pub start: Instant,
    progress_cnt: usize,
}

impl Default for State {
    fn default() -> State {
        State {
            ok: true,
            stats: [0; Stat::EndOfStatIndex as usize],
            target: CNFDescription::default(),
            config: Config::default(),
            start: Instant::now(),
            progress_cnt: 0,
        }
    }
}

impl Index<Stat> for State {
    type Output = usize;
    #[inline]
    fn index(&self, i: Stat) -> &usize {
        &self.stats[i as usize]
    }
}

impl IndexMut<Stat> for State {
    #[inline]
    fn index_mut(&mut self, i: Stat) -> &mut usize {
        &mut self.stats[i as usize]
    }
}

impl Instantiate for State {
    fn instantiate(config: &Config, cnf: &CNFDescription) -> State {
        State {
            target: cnf.clone(),
            config: config.clone(),
            ..State::default()
        }
    }
}

/// API for state/statistics management, including the final report.
pub trait StateIF {
    /// return the elapsed wall time in seconds since the build.
    fn elapsed(&self) -> f64;
    /// write a header of progress report.
    fn progress_header(&mut self);
    /// write a progress report.
    fn progress(&mut self, asg: &AssignStack, cdb: &ClauseDB);
    /// write a one-shot message.
    fn flush<S: AsRef<str>>(&self, mes: S);
    /// write the verdict and the final statistics to stderr.
    fn report(&mut self, asg: &AssignStack, cdb: &ClauseDB, verdict: &str);
}

macro_rules! emphasize {
    ($state: expr, $mes: expr) => {
        if $state.config.no_color {
            $mes.to_string()
        } else {
            format!("\x1B[001m{}\x1B[000m", $mes)
        }
    };
}

impl StateIF for State {
    fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
    fn progress_header(&mut self) {
        if self.config.quiet_mode {
            return;
        }
        if self.config.use_log {
            println!("c {:<40}|v: {:>8}|c: {:>8}", "", "decision", "conflict");
            return;
        }
        println!("{self}");
        println!("                                                  ");
        println!("                                                  ");
    }
    fn progress(&mut self, asg: &AssignStack, cdb: &ClauseDB) {
        self.sync(asg);
        if self.config.quiet_mode {
            return;
        }
        self.progress_cnt += 1;
        if self.config.use_log {
            println!(
                "c #{:>8}, assign: {:>8}, conflict: {:>8}, learnt: {:>8}",
                self.progress_cnt,
                asg.stack_len(),
                self[Stat::Conflict],
                cdb.num_learnt,
            );
            return;
        }
        print!("\x1B[2A");
        println!(
            " #conflict:{:>11}, #decision:{:>13}, #propagate:{:>15} ",
            emphasize!(self, self[Stat::Conflict]),
            self[Stat::Decision],
            self[Stat::Propagation],
        );
        println!(
            "  Assignment|#rem:{:>9}, #ass:{:>9}, Clause|#learnt:{:>9}, #extinct:{:>9} ",
            asg.num_vars - asg.stack_len(),
            asg.stack_len(),
            cdb.num_learnt,
            cdb.num_extinct,
        );
    }
    fn flush<S: AsRef<str>>(&self, mes: S) {
        if self.config.quiet_mode || self.config.use_log {
            return;
        }
        print!("{}", mes.as_ref());
        stdout().flush().unwrap_or(());
    }
    fn report(&mut self, asg: &AssignStack, _cdb: &ClauseDB, verdict: &str) {
        self.sync(asg);
        eprintln!("v {verdict}");
        eprintln!("Conflicts:         {}", self[Stat::Conflict]);
        eprintln!("Decisions:         {}", self[Stat::Decision]);
        eprintln!("Unit Propagations: {}", self[Stat::Propagation]);
        eprintln!("{:.1}s {}Mb", self.elapsed(), peak_rss_in_mb());
    }
}

impl State {
    /// mirror the live counters into the stat array.
    fn sync(&mut self, asg: &AssignStack) {
        self[Stat::Conflict] = asg.num_conflict;
        self[Stat::Decision] = asg.num_decision;
        self[Stat::Propagation] = asg.num_propagation;
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tm = self.elapsed();
        write!(
            f,
            "{:<36}|time:{:>9.2}",
            format!("{}", self.target),
            tm
        )
    }
}

/// the peak resident set size of this process in megabytes.
/// `ru_maxrss` is reported in kilobytes on Linux.
#[cfg(all(unix, not(target_os = "macos")))]
fn peak_rss_in_mb() -> usize {
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    if unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) } == 0 {
        usage.ru_maxrss as usize / 1024
    } else {
        0
    }
}

/// `ru_maxrss` is reported in bytes on macOS.
#[cfg(target_os = "macos")]
fn peak_rss_in_mb() -> usize {
    let mut usage: libc::rusage = unsafe { std::mem::zeroed() };
    if unsafe { libc::getrusage(libc::RUSAGE_SELF, &mut usage) } == 0 {
        usage.ru_maxrss as usize / 1_048_576
    } else {
        0
    }
}

#[cfg(not(unix))]
fn peak_rss_in_mb() -> usize {
    0
}
