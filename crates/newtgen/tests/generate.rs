//! End-to-end tests over real descriptor files.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

fn write_desc(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn single_file_full_artifact() {
    let dir = TempDir::new().unwrap();
    let desc = write_desc(
        &dir,
        "newt.builtin",
        "# automatically generated - do not edit\n\
         print,-1\n\
         if,IF\n\
         len,1\n\
         time.sleep,1\n",
    );

    let header = newtgen::generate_to_string(&[desc]).unwrap();

    // Data branch: name table sorted by name, dispatch keyed by constants.
    assert!(header.contains("\tIF | 0x80, 'i', 'f', 0,"));
    assert!(header.contains("\t2, 'l', 'e', 'n', 0,"));
    assert!(header.contains("\t1, 'p', 'r', 'i', 'n', 't', 0,"));
    assert!(header.contains("\t3, 't', 'i', 'm', 'e', '.', 's', 'l', 'e', 'e', 'p', 0,"));
    assert!(header.contains("newt_builtin_print(int nactuals, ...);"));
    assert!(header.contains("[NEWT_BUILTIN_time_sleep - 1] = {"));

    // Declaration branch: comment pass-through, IDs, sentinel.
    assert!(header.contains("# automatically generated - do not edit\n"));
    assert!(header.contains("#define NEWT_BUILTIN_print 1\n"));
    assert!(header.contains("#define NEWT_BUILTIN_len 2\n"));
    assert!(header.contains("#define NEWT_BUILTIN_time_sleep 3\n"));
    assert!(header.contains("#define NEWT_BUILTIN_END 4\n"));
}

#[test]
fn ids_accumulate_across_files_in_argument_order() {
    let dir = TempDir::new().unwrap();
    let first = write_desc(&dir, "core.builtin", "print,1\nexit,0\n");
    let second = write_desc(&dir, "gpio.builtin", "talkto,1\nsetpower,1\n");

    let header = newtgen::generate_to_string(&[first, second]).unwrap();

    assert!(header.contains("#define NEWT_BUILTIN_print 1\n"));
    assert!(header.contains("#define NEWT_BUILTIN_exit 2\n"));
    assert!(header.contains("#define NEWT_BUILTIN_talkto 3\n"));
    assert!(header.contains("#define NEWT_BUILTIN_setpower 4\n"));
    assert!(header.contains("#define NEWT_BUILTIN_END 5\n"));
}

#[test]
fn file_order_changes_ids_but_not_table_order() {
    let dir = TempDir::new().unwrap();
    let a = write_desc(&dir, "a.builtin", "zebra,1\n");
    let b = write_desc(&dir, "b.builtin", "apple,1\n");

    let forward = newtgen::generate_to_string(&[a.clone(), b.clone()]).unwrap();
    let reverse = newtgen::generate_to_string(&[b, a]).unwrap();

    // IDs follow first-seen order.
    assert!(forward.contains("#define NEWT_BUILTIN_zebra 1\n"));
    assert!(reverse.contains("#define NEWT_BUILTIN_zebra 2\n"));

    // The name table stays alphabetical either way.
    for header in [&forward, &reverse] {
        let apple = header.find("'a', 'p', 'p', 'l', 'e', 0,").unwrap();
        let zebra = header.find("'z', 'e', 'b', 'r', 'a', 0,").unwrap();
        assert!(apple < zebra);
    }
}

#[test]
fn output_file_is_written_once() {
    let dir = TempDir::new().unwrap();
    let desc = write_desc(&dir, "newt.builtin", "print,1\n");
    let out = dir.path().join("newt-builtin.h");

    newtgen::generate(&[desc], Some(&out)).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("#ifdef NEWT_BUILTIN_DATA\n"));
    assert!(written.ends_with("#endif /* NEWT_BUILTIN_DATA */\n"));
}

#[test]
fn malformed_line_aborts_with_no_output() {
    let dir = TempDir::new().unwrap();
    let good = write_desc(&dir, "good.builtin", "print,1\n");
    let bad = write_desc(&dir, "bad.builtin", "bad_line_no_comma\n");
    let out = dir.path().join("newt-builtin.h");

    let err = newtgen::generate(&[good, bad], Some(&out)).unwrap_err();

    assert!(matches!(
        err,
        newtgen::Error::Desc(newtgen::DescError::MalformedLine { .. })
    ));
    assert!(!out.exists(), "no partial output may be written");
}

#[test]
fn missing_input_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = newtgen::generate_to_string(&[dir.path().join("nope.builtin")]).unwrap_err();
    assert!(matches!(
        err,
        newtgen::Error::Desc(newtgen::DescError::MissingInput { .. })
    ));
}

#[test]
fn duplicate_name_across_files_is_fatal() {
    let dir = TempDir::new().unwrap();
    let first = write_desc(&dir, "a.builtin", "print,1\n");
    let second = write_desc(&dir, "b.builtin", "print,-1\n");

    let err = newtgen::generate_to_string(&[first, second]).unwrap_err();
    assert!(matches!(
        err,
        newtgen::Error::Desc(newtgen::DescError::DuplicateName { .. })
    ));
}

#[test]
fn declaration_ids_are_gapless() {
    let dir = TempDir::new().unwrap();
    let desc = write_desc(
        &dir,
        "newt.builtin",
        "print,-1\nif,IF\nwhile,WHILE\nlen,1\nexit,0\nmath.pow,2\n",
    );

    let header = newtgen::generate_to_string(&[desc]).unwrap();

    let decl_branch = header.split("#else /* NEWT_BUILTIN_DATA */").nth(1).unwrap();
    let mut ids: Vec<u32> = decl_branch
        .lines()
        .filter(|l| l.starts_with("#define NEWT_BUILTIN_"))
        .filter(|l| !l.contains("NEWT_BUILTIN_END"))
        .map(|l| l.rsplit(' ').next().unwrap().parse().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, [1, 2, 3, 4]);

    let end: u32 = header
        .lines()
        .find(|l| l.starts_with("#define NEWT_BUILTIN_END"))
        .and_then(|l| l.rsplit(' ').next())
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(end, 5);
}
