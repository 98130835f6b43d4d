use clap::Parser;
use std::path::{Path, PathBuf};
use tokio::process::Command;

mod cli;

const BUNDLE_DIR: &str = "Muse";
const LAUNCHER: &str = "muse-launcher";

async fn run(cmd: &mut Command) -> Result<(), Box<dyn std::error::Error>> {
    let status = cmd.spawn()?.wait().await?;
    if !status.success() {
        return Err(format!("{:?} exited with {}", cmd.as_std(), status).into());
    }
    Ok(())
}

fn trunk_build(release: bool) -> std::io::Result<Command> {
    let mut cmd = Command::new("trunk");
    cmd.current_dir(std::fs::canonicalize("frontend")?);
    cmd.arg("build");
    if release {
        cmd.arg("--release");
    }
    Ok(cmd)
}

fn launcher_binary(target_triple: Option<&str>) -> PathBuf {
    let mut path = PathBuf::from("target");
    if let Some(triple) = target_triple {
        path.push(triple);
    }
    path.join("release").join(LAUNCHER)
}

async fn copy_dir(from: &Path, to: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(to).await?;
    let mut entries = tokio::fs::read_dir(from).await?;
    while let Some(entry) = entries.next_entry().await? {
        if entry.file_type().await?.is_file() {
            tokio::fs::copy(entry.path(), to.join(entry.file_name())).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Launch { launcher_args } => {
            run(&mut trunk_build(false)?).await?;

            let mut cmd = Command::new("cargo");
            cmd.arg("run")
                .arg("--package")
                .arg(LAUNCHER)
                .arg("--")
                .arg("--dist-dir")
                .arg("frontend/dist")
                .args(launcher_args);
            run(&mut cmd).await
        }
        cli::Command::Dist { target_triple } => {
            let mut cmd = Command::new("cargo");
            cmd.arg("build")
                .arg("--package")
                .arg(LAUNCHER)
                .arg("--release");
            if let Some(target_triple) = &target_triple {
                cmd.arg("--target").arg(target_triple);
            }
            run(&mut cmd).await?;

            run(&mut trunk_build(true)?).await?;

            let bundle = Path::new(BUNDLE_DIR);
            tokio::fs::create_dir_all(bundle).await?;
            tokio::fs::copy(
                launcher_binary(target_triple.as_deref()),
                bundle.join(LAUNCHER),
            )
            .await?;
            copy_dir(Path::new("frontend/dist"), &bundle.join("dist")).await?;

            Ok(())
        }
    }
}
