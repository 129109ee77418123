use clap_complete::{generate_to, shells::Shell};
use std::{env, fs, io::Result, path::Path};

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!(
            "Failed to create a directory at location {:?}, encountered error {:?}.  Aborting...",
            dir, err
        );
    }

    res
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/npu_exporter/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/npu_exporter/manpage/";

    match env::var_os("NPU_EXPORTER_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            // Generate completions
            let mut cmd = build_cmd();
            for shell in [
                Shell::Bash,
                Shell::Zsh,
                Shell::Fish,
                Shell::PowerShell,
                Shell::Elvish,
            ] {
                generate_to(shell, &mut cmd, "npu_exporter", &completion_out_dir)?;
            }

            // Generate manpage
            let cmd = cmd.name("npu_exporter");
            let man = clap_mangen::Man::new(cmd);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            fs::write(manpage_out_dir.join("npu_exporter.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=NPU_EXPORTER_GENERATE");
    println!("cargo:rerun-if-changed=src/options/args.rs");

    Ok(())
}
