/// Escapes the capturing of output from tests so it's visible even when the test succeeds.
pub fn test_print(message: impl AsRef<str>) {
    use std::io::Write;

    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(message.as_ref().as_bytes()).unwrap();
    lock.write_all(b"\n").unwrap();
}
