//! Driving the static-site generator.
//!
//! The combined site is built and previewed by `mkdocs`; this module only
//! assembles the command lines and runs them.

use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::DEFAULT_DEV_ADDR;
use crate::error::{DocsError, Result};

/// How long to wait for the preview server before opening the browser anyway.
const SERVER_WAIT_ATTEMPTS: u32 = 50;
const SERVER_WAIT_INTERVAL: Duration = Duration::from_millis(200);

/// Builds and presents a combined site from its root config file.
pub trait SiteGenerator {
    /// Build the static site into `site_dir`.
    fn build(&mut self, config_file: &Path, site_dir: &Path) -> Result<()>;

    /// Show the built site to the user.
    fn present(&mut self, config_file: &Path, site_dir: &Path) -> Result<()>;
}

/// What [`MkDocs::present`] does after a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Only report where the site was written.
    BuildOnly,
    /// Run `mkdocs serve` until interrupted.
    Serve {
        /// Address the preview server listens on.
        dev_addr: String,
        /// Open the preview in a browser once it is up.
        open_browser: bool,
    },
}

impl Default for Presentation {
    fn default() -> Self {
        Presentation::Serve {
            dev_addr: DEFAULT_DEV_ADDR.to_string(),
            open_browser: true,
        }
    }
}

/// `mkdocs` command-line generator.
#[derive(Debug, Clone)]
pub struct MkDocs {
    executable: String,
    extra_args: Vec<String>,
    presentation: Presentation,
    dry_run: bool,
}

impl Default for MkDocs {
    fn default() -> Self {
        Self::new("mkdocs")
    }
}

impl MkDocs {
    /// Create a generator using the given executable.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            extra_args: Vec::new(),
            presentation: Presentation::default(),
            dry_run: false,
        }
    }

    /// Append arguments to every mkdocs invocation.
    pub fn with_extra_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    /// Choose what happens after the build.
    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    /// Print commands instead of running them.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Command building the site.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use monodocs::docs::MkDocs;
    ///
    /// let mkdocs = MkDocs::default();
    /// let cmd = mkdocs.build_command(Path::new("all/mkdocs.yml"), Path::new("all/site"));
    /// assert_eq!(cmd.join(" "), "mkdocs build -f all/mkdocs.yml -d all/site");
    /// ```
    pub fn build_command(&self, config_file: &Path, site_dir: &Path) -> Vec<String> {
        let mut cmd = vec![
            self.executable.clone(),
            "build".into(),
            "-f".into(),
            config_file.display().to_string(),
            "-d".into(),
            site_dir.display().to_string(),
        ];
        cmd.extend(self.extra_args.iter().cloned());
        cmd
    }

    /// Command serving the site for preview.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use monodocs::docs::MkDocs;
    ///
    /// let cmd = MkDocs::default().serve_command(Path::new("all/mkdocs.yml"), "127.0.0.1:8000");
    /// assert_eq!(cmd.join(" "), "mkdocs serve -f all/mkdocs.yml -a 127.0.0.1:8000");
    /// ```
    pub fn serve_command(&self, config_file: &Path, dev_addr: &str) -> Vec<String> {
        let mut cmd = vec![
            self.executable.clone(),
            "serve".into(),
            "-f".into(),
            config_file.display().to_string(),
            "-a".into(),
            dev_addr.to_string(),
        ];
        cmd.extend(self.extra_args.iter().cloned());
        cmd
    }

    fn run(&self, cmd_parts: &[String]) -> Result<()> {
        let command_str = cmd_parts.join(" ");

        if self.dry_run {
            println!("Would run: {command_str}");
            return Ok(());
        }

        debug!(command = %command_str, "running generator");

        let status = command(cmd_parts)
            .status()
            .map_err(|e| spawn_failure(&command_str, e))?;

        check_status(&command_str, status)
    }

    fn serve(&self, config_file: &Path, dev_addr: &str, open: bool) -> Result<()> {
        let cmd_parts = self.serve_command(config_file, dev_addr);
        let command_str = cmd_parts.join(" ");
        let url = format!("http://{dev_addr}/");

        if self.dry_run {
            println!("Would run: {command_str}");
            if open {
                println!("Would open: {url}");
            }
            return Ok(());
        }

        println!("Serving combined documentation at {url} (Ctrl+C to stop)");

        let mut child = command(&cmd_parts)
            .spawn()
            .map_err(|e| spawn_failure(&command_str, e))?;

        if open {
            if wait_for_server(dev_addr, &mut child) {
                open_browser(&url);
            } else {
                warn!(%dev_addr, "preview server did not come up; not opening a browser");
            }
        }

        let status = child
            .wait()
            .map_err(|e| spawn_failure(&command_str, e))?;

        check_status(&command_str, status)
    }
}

impl SiteGenerator for MkDocs {
    fn build(&mut self, config_file: &Path, site_dir: &Path) -> Result<()> {
        info!(config = %config_file.display(), "building combined site");
        self.run(&self.build_command(config_file, site_dir))
    }

    fn present(&mut self, config_file: &Path, site_dir: &Path) -> Result<()> {
        match self.presentation.clone() {
            Presentation::BuildOnly => {
                println!(
                    "Combined documentation written to {}",
                    site_dir.join("index.html").display()
                );
                Ok(())
            }
            Presentation::Serve {
                dev_addr,
                open_browser,
            } => self.serve(config_file, &dev_addr, open_browser),
        }
    }
}

fn command(cmd_parts: &[String]) -> Command {
    let mut command = Command::new(&cmd_parts[0]);
    command.args(&cmd_parts[1..]);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    command
}

fn spawn_failure(command_str: &str, e: std::io::Error) -> DocsError {
    DocsError::GeneratorFailed {
        command: command_str.to_string(),
        status: format!("could not run: {e}"),
    }
}

fn check_status(command_str: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        Err(DocsError::generator_failed(command_str, status))
    }
}

/// Poll the preview address until it accepts connections.
///
/// Gives up as soon as the server process exits.
fn wait_for_server(dev_addr: &str, server: &mut Child) -> bool {
    let addrs: Vec<SocketAddr> = match dev_addr.to_socket_addrs() {
        Ok(addrs) => addrs.collect(),
        Err(e) => {
            warn!(%dev_addr, "cannot resolve preview address: {e}");
            return false;
        }
    };

    for _ in 0..SERVER_WAIT_ATTEMPTS {
        match server.try_wait() {
            Ok(None) => {}
            Ok(Some(status)) => {
                debug!(%status, "preview server exited before accepting connections");
                return false;
            }
            Err(e) => {
                warn!("cannot check preview server: {e}");
                return false;
            }
        }

        if addrs
            .iter()
            .any(|addr| TcpStream::connect_timeout(addr, SERVER_WAIT_INTERVAL).is_ok())
        {
            return true;
        }
        thread::sleep(SERVER_WAIT_INTERVAL);
    }

    false
}

/// Platform command opening a URL in the default browser.
pub fn browser_command(url: &str) -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["open".into(), url.into()]
    } else if cfg!(windows) {
        vec!["cmd".into(), "/C".into(), "start".into(), String::new(), url.into()]
    } else {
        vec!["xdg-open".into(), url.into()]
    }
}

/// Open a URL in the browser. Failures are only logged.
fn open_browser(url: &str) {
    let cmd_parts = browser_command(url);
    let result = Command::new(&cmd_parts[0])
        .args(&cmd_parts[1..])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    if let Err(e) = result {
        warn!(%url, "could not open browser: {e}");
        eprintln!("Open {url} in your browser to view the documentation.");
    }
}
