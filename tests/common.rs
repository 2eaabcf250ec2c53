#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use guruhadir::core::{RecordStore, StoreOptions};
use guruhadir::errors::{AppError, AppResult};
use guruhadir::storage::MemoryKv;
use guruhadir::sync::Transport;
use image::{ImageFormat, Rgba, RgbaImage};
use serde_json::Value;
use std::cell::RefCell;
use std::env;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

/// Binary under test, isolated from the user's own configuration.
pub fn gh(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("guruhadir");
    cmd.env("GURUHADIR_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

/// Fresh home directory for one test; returns (home, db path).
pub fn setup_test_home(name: &str) -> (String, String) {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("guruhadir_{name}"));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test home");

    let db = dir.join("guruhadir.sqlite");
    (
        dir.to_string_lossy().to_string(),
        db.to_string_lossy().to_string(),
    )
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("guruhadir_{name}_out.{ext}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the database and log in offline with the demo password.
pub fn init_and_login(home: &str, db: &str) {
    gh(home)
        .args(["--db", db, "--test", "init"])
        .assert()
        .success();

    gh(home)
        .args(["--db", db, "--endpoint", "", "login", "budi.santoso", "123456"])
        .assert()
        .success();
}

pub fn memory_store(quota: usize, keep: usize) -> RecordStore<MemoryKv> {
    RecordStore::new(
        MemoryKv::with_quota(quota),
        StoreOptions {
            keep_on_overflow: keep,
            strip_local_photos: false,
        },
    )
}

/// PNG of the given size as a data URI. Pixels are `fill`.
pub fn png_data_uri(width: u32, height: u32, fill: [u8; 4]) -> String {
    format!("data:image/png;base64,{}", B64.encode(png_bytes(width, height, fill)))
}

pub fn png_bytes(width: u32, height: u32, fill: [u8; 4]) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba(fill));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png).expect("encode png");
    buf.into_inner()
}

/// Scripted transport: records every request and replays canned replies.
#[derive(Default)]
pub struct FakeTransport {
    pub replies: RefCell<Vec<AppResult<Value>>>,
    pub sent: RefCell<Vec<(String, Value)>>,
}

impl FakeTransport {
    pub fn replying(reply: Value) -> Self {
        let t = Self::default();
        t.replies.borrow_mut().push(Ok(reply));
        t
    }

    pub fn failing() -> Self {
        let t = Self::default();
        t.replies
            .borrow_mut()
            .push(Err(AppError::Other("connection refused".to_string())));
        t
    }
}

impl Transport for FakeTransport {
    fn post_json(&self, url: &str, body: &Value) -> AppResult<Value> {
        self.sent.borrow_mut().push((url.to_string(), body.clone()));
        let mut replies = self.replies.borrow_mut();
        if replies.is_empty() {
            Err(AppError::Other("no scripted reply".to_string()))
        } else {
            replies.remove(0)
        }
    }
}
