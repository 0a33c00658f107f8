#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Plain (ASCII) variants, with comments and line-spanning tokens
    fs::write(format!("{dir}/p1_3x2.pbm"), b"P1\n# comment\n3 2\n1 0 1\n0 1 0\n").unwrap();
    fs::write(format!("{dir}/p2_3x2.pgm"), b"P2\n3 2\n15\n0 7\n15 3 1\n9\n").unwrap();
    fs::write(format!("{dir}/p3_2x1.ppm"), b"P3 2 1 255 255 0 0 0 255 0\n").unwrap();

    // Binary variants
    fs::write(format!("{dir}/p4_10x2.pbm"), b"P4\n10 2\n\x80\x40\xff\xc0").unwrap();
    fs::write(format!("{dir}/p5_3x2.pgm"), b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64").unwrap();
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/p6_2x2.ppm"), ppm).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p7.bin"), b"P7\n1 1\n").unwrap();
    fs::write(format!("{dir}/p2_bad_max.bin"), b"P2\n1 1\n300\n1\n").unwrap();
    fs::write(format!("{dir}/p1_bad_token.bin"), b"P1\n2 1\n1 2\n").unwrap();
    fs::write(format!("{dir}/p4_short.bin"), b"P4\n9 2\n\xff").unwrap();
    fs::write(format!("{dir}/p1_huge_short.bin"), b"P1\n200000 200000\n1\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
