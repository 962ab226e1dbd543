use clap::CommandFactory;
include!("src/cli.rs");
fn main() -> Result<(), std::io::Error> {
    // man page and completions are only generated when MAN_PAGE_DIR is set.
    let Some(out_dir) = std::env::var_os("MAN_PAGE_DIR").map(std::path::PathBuf::from) else {
        return Ok(());
    };
    println!("out_dir: {:?}", out_dir);

    let mut cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;

    match std::fs::write(out_dir.join("solace-consumer.1"), buffer) {
        Ok(_) => {
            println!("file written");
        }
        Err(e) => {
            println!("error writing file: {}", e.to_string());
        }
    };

    let bash_completion_file = out_dir.join("solace-consumer.bash");

    let mut file = std::fs::File::create(bash_completion_file)?;

    let bin_name = "solace-consumer";
    clap_complete::generate(clap_complete::shells::Bash, &mut cmd, bin_name, &mut file);
    Ok(())
}
