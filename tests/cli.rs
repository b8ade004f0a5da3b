use std::process::{Command, Output};

use salt_vanity::{derive_address, SearchParams};

const DEPLOYER: &str = "4838B106FCE9647BDF1E7877BF73CE8B0BAD5F97";
const BYTECODE_HASH: &str = "C03ECA48FFA996BD8D5E3BE48957EFDE5E1B3E6D1D11323BC2F18DD403744432";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_salt-vanity"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run salt-vanity")
}

#[test]
fn prints_one_result_pair() {
    let out = run(&[DEPLOYER, BYTECODE_HASH, "00", "-w", "4"]);
    assert_eq!(out.status.code(), Some(0));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected stdout: {:?}", stdout);

    let salt = lines[0].strip_prefix("Found salt: ").unwrap();
    let address = lines[1].strip_prefix("Generated address: ").unwrap();
    assert_eq!(salt.len(), 64);
    assert_eq!(address.len(), 40);
    assert!(address.ends_with("00"));
    assert_eq!(address, address.to_lowercase());

    let params = SearchParams::from_hex(DEPLOYER, BYTECODE_HASH, "00").unwrap();
    let salt: [u8; 32] = hex::decode(salt).unwrap().try_into().unwrap();
    let derived = derive_address(&params.deployer, &salt, &params.bytecode_hash);
    assert_eq!(hex::encode(derived), address);
}

#[test]
fn missing_arguments_exit_1() {
    let out = run(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());

    let out = run(&[DEPLOYER]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
}

#[test]
fn bad_deployer_length_exit_1() {
    let out = run(&[&DEPLOYER[..39], BYTECODE_HASH]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("deployer address"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn bad_bytecode_hash_exit_1() {
    let out = run(&[DEPLOYER, &BYTECODE_HASH[..62]]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn non_hex_digit_exit_1() {
    let bad = format!("{}g", &DEPLOYER[..39]);
    let out = run(&[&bad, BYTECODE_HASH]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn overlong_suffix_exit_1() {
    let suffix = "0".repeat(41);
    let out = run(&[DEPLOYER, BYTECODE_HASH, &suffix]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn help_exits_0() {
    let out = run(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("DEPLOYER_ADDRESS_HEX"));
}

#[test]
fn check_salt_prints_derived_address() {
    let salt = "611b580e675bacaa4ad87a3a8ec25c59e16546ee4c42aad1c3fe783dee7c1de6";
    let out = run(&[DEPLOYER, BYTECODE_HASH, "--check-salt", salt]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Generated address: 20254e1759c04396833dbfe34beeba869ab62400\n"
    );

    let out = run(&[DEPLOYER, BYTECODE_HASH, "-s", &"0".repeat(64)]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "Generated address: a77c205048110d7026ac2d52f3603d8e29c96967\n"
    );
}

#[test]
fn bad_check_salt_exit_1() {
    let out = run(&[DEPLOYER, BYTECODE_HASH, "--check-salt", "611b58"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("salt"));
}
