use std::process::Command;

const PAGES_DIR: &str = "pages";
const PAGES_OUT_DIR: &str = "pages/pkg";
const PAGES_WASM: &str = "hearth_pages.wasm";
const WASM_TARGET: &str = "wasm32-unknown-unknown";

fn execute(dir: &str, args: &[&str]) -> Result<(), String> {
    let (cmd, rest) = args.split_first().ok_or("empty command")?;
    let cmd_full = args.join(" ");
    eprintln!("Running '{}'", cmd_full);

    let status = Command::new(cmd)
        .current_dir(dir)
        .args(rest)
        .status()
        .map_err(|err| format!("Could not start command '{}': {}", cmd_full, err))?;

    if !status.success() {
        return Err(format!(
            "Command '{}' terminated with a non-0 exit code",
            cmd_full
        ));
    }
    eprintln!("Finished: '{}'", cmd_full);
    Ok(())
}

fn pages_build(release: bool) -> Result<(), String> {
    let mut build = vec!["cargo", "build", "--target", WASM_TARGET];
    if release {
        build.push("--release");
    }
    execute(PAGES_DIR, &build)?;

    let profile = if release { "release" } else { "debug" };
    let wasm = format!("./target/{}/{}/{}", WASM_TARGET, profile, PAGES_WASM);
    execute(
        "./",
        &[
            "wasm-bindgen",
            "--target",
            "web",
            "--no-typescript",
            "--out-dir",
            PAGES_OUT_DIR,
            wasm.as_str(),
        ],
    )
}

fn pages_watch() -> Result<(), String> {
    execute(
        "./",
        &[
            "cargo",
            "watch",
            "-w",
            "pages/src",
            "-w",
            "hearth/src",
            "-w",
            "hearth_ui/src",
            "-s",
            "cargo xtask pages-build",
        ],
    )
}

fn main() {
    let args: Vec<_> = std::env::args().skip(1).collect();
    let arg_refs: Vec<_> = args.iter().map(|x| x.as_str()).collect();

    let result = match arg_refs.as_slice() {
        ["pages-build"] => pages_build(false),
        ["pages-build", "--release"] => pages_build(true),
        ["pages-watch"] => pages_watch(),
        _ => Err("Unknown arguments. Expected one of: pages-build [--release], pages-watch".into()),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
