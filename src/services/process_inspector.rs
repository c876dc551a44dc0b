use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};

use crate::error::InspectError;
use crate::models::ProcessDescriptor;

/// 进程表来源
pub trait ProcessSource: Send + Sync {
    /// 返回所有能读到命令行的进程，按 PID 升序
    fn processes(&self) -> Result<Vec<ProcessDescriptor>, InspectError>;
}

/// 基于 sysinfo 读取本机进程表，每次调用都重新枚举
#[derive(Debug, Default)]
pub struct SystemProcessSource;

impl ProcessSource for SystemProcessSource {
    fn processes(&self) -> Result<Vec<ProcessDescriptor>, InspectError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(InspectError::Unsupported);
        }

        let mut sys = System::new();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_cmd(UpdateKind::Always),
        );

        if sys.processes().is_empty() {
            return Err(InspectError::EmptyProcessTable);
        }

        let mut processes = Vec::with_capacity(sys.processes().len());
        for (pid, process) in sys.processes() {
            // Linux 下每个线程也会作为一项出现，命令行与主进程相同
            if process.thread_kind().is_some() {
                continue;
            }

            let cmd = process.cmd();
            // 权限不足、进程已退出、内核线程都会读到空命令行
            if cmd.is_empty() {
                log::trace!("Skipping PID {}: command line unavailable", pid);
                continue;
            }

            processes.push(ProcessDescriptor {
                pid: pid.as_u32(),
                arguments: cmd.iter().map(|s| s.to_string_lossy().into_owned()).collect(),
            });
        }

        processes.sort_by_key(|p| p.pid);
        Ok(processes)
    }
}

/// 命令行中包含 `marker` 参数的进程
pub fn matching_processes<'a>(
    processes: &'a [ProcessDescriptor],
    marker: &'a str,
) -> impl Iterator<Item = &'a ProcessDescriptor> + 'a {
    processes.iter().filter(move |p| p.has_argument(marker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process;
    use std::sync::{mpsc, Arc, Mutex};
    use std::thread;

    #[test]
    fn test_finds_current_process() {
        let processes = SystemProcessSource.processes().unwrap();
        let current = processes.iter().find(|p| p.pid == process::id());
        let current = current.expect("current process should be listed");
        assert!(!current.arguments.is_empty());
    }

    #[test]
    fn test_threads_are_not_listed_as_processes() {
        let (ready_tx, ready_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let stop_rx = Arc::new(Mutex::new(stop_rx));

        let workers: Vec<_> = (0..4)
            .map(|_| {
                let ready_tx = ready_tx.clone();
                let stop_rx = stop_rx.clone();
                thread::spawn(move || {
                    ready_tx.send(()).unwrap();
                    let _ = stop_rx.lock().unwrap().recv();
                })
            })
            .collect();
        for _ in 0..4 {
            ready_rx.recv().unwrap();
        }

        let processes = SystemProcessSource.processes().unwrap();
        let current = processes
            .iter()
            .find(|p| p.pid == process::id())
            .expect("current process should be listed")
            .arguments
            .clone();
        let same_argv: Vec<u32> = processes
            .iter()
            .filter(|p| p.arguments == current)
            .map(|p| p.pid)
            .collect();

        drop(stop_tx);
        for worker in workers {
            worker.join().unwrap();
        }

        assert_eq!(same_argv, vec![process::id()]);
    }

    #[test]
    fn test_sorted_by_pid() {
        let processes = SystemProcessSource.processes().unwrap();
        assert!(processes.windows(2).all(|w| w[0].pid < w[1].pid));
    }

    #[test]
    fn test_matching_processes() {
        let processes = vec![
            ProcessDescriptor {
                pid: 10,
                arguments: vec!["java".into(), "-Dweblogic.Name=AdminServer".into()],
            },
            ProcessDescriptor {
                pid: 11,
                arguments: vec!["java".into(), "-Dweblogic.Name=ManagedServer1".into()],
            },
            ProcessDescriptor {
                pid: 12,
                arguments: vec!["bash".into()],
            },
        ];

        let matched: Vec<u32> = matching_processes(&processes, "-Dweblogic.Name=AdminServer")
            .map(|p| p.pid)
            .collect();
        assert_eq!(matched, vec![10]);
    }
}
