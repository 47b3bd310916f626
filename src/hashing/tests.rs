use super::*;

use std::io::Cursor;

use assert_matches::assert_matches;

const EMPTY: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const ABC: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn limit(n: u64) -> Option<NonZeroU64> {
    NonZeroU64::new(n)
}

#[test]
fn test_hash_reader() {
    assert_eq!(hash_reader(Cursor::new(""), None).unwrap().to_string(), EMPTY);
    assert_eq!(hash_reader(Cursor::new("abc"), None).unwrap().to_string(), ABC);
}

#[test]
fn test_hash_reader_limit() {
    assert_eq!(hash_reader(Cursor::new("abcdef"), limit(3)).unwrap().to_string(), ABC);
    assert_eq!(hash_reader(Cursor::new("abc"), limit(1024)).unwrap().to_string(), ABC);
    assert_ne!(
        hash_reader(Cursor::new("abcdef"), limit(4)).unwrap(),
        hash_reader(Cursor::new("abcdef"), None).unwrap()
    );
}

#[test]
fn test_hash_reader_large_input() {
    const CHUNK: usize = 64 * 1024;
    let data = vec![7u8; CHUNK * 3 + 17];
    let whole = hash_reader(Cursor::new(&data), None).unwrap();
    assert_eq!(whole, hash_reader(Cursor::new(&data), limit(data.len() as u64)).unwrap());
    assert_ne!(whole, hash_reader(Cursor::new(&data), limit(CHUNK as u64)).unwrap());
    assert_eq!(whole.to_string().len(), 64);
}

struct Interrupting<R> {
    inner: R,
    interrupted: bool,
}

impl<R: Read> Read for Interrupting<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !self.interrupted {
            self.interrupted = true;
            return Err(io::ErrorKind::Interrupted.into());
        }
        self.inner.read(buf)
    }
}

#[test]
fn test_hash_reader_interrupted() {
    let reader = Interrupting {
        inner: Cursor::new("abc"),
        interrupted: false,
    };
    assert_eq!(hash_reader(reader, None).unwrap().to_string(), ABC);
}

#[test]
fn test_hash_reader_error() {
    struct Broken;
    impl Read for Broken {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::ErrorKind::PermissionDenied.into())
        }
    }
    assert_matches!(hash_reader(Broken, None), Err(err) if err.kind() == io::ErrorKind::PermissionDenied);
}

#[test]
fn test_hash_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abc.txt");
    std::fs::write(&path, "abc").unwrap();
    assert_eq!(hash_file(&path, None).unwrap().to_string(), ABC);
}

#[test]
fn test_hash_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    assert_matches!(hash_file(&path, None), Err(Error::FailedToOpenFile { path: p, .. }) if p == path);
}
