/// Binary entrypoint for the `reflection-refresh` executable.
///
/// Keeps the binary thin: mode selection and generator execution live in the
/// library so unit tests can import them directly. The generator's exit code
/// passes through unchanged; a failure to launch the generator at all is
/// reported on stderr and exits 1.
fn main() {
    match reflection_refresh::run(std::env::args().skip(1)) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("reflection-refresh: {err:#}");
            std::process::exit(1);
        }
    }
}
