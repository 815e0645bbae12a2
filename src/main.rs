//! binconv - CLI Entry Point
//!
//! Commands:
//! - `binconv demo` - Print the example computations
//! - `binconv add <a> <b>` - Fixed-width addition of two bit strings
//! - `binconv dec2bin <digits>` - Decimal to binary via BCD halving
//! - `binconv int32 <x>` - 32-bit encoding of an unsigned integer
//! - `binconv test` - Built-in self-test

use std::fmt::Display;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "binconv")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "Fixed-width binary arithmetic and BCD decimal-to-binary conversion")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the example computations
    Demo,
    /// Add two bit strings of equal width (overflow is dropped)
    Add {
        /// First operand, MSB first (e.g. 0111)
        a: String,
        /// Second operand, MSB first (e.g. 0101)
        b: String,
    },
    /// Print the value of a bit string
    Value {
        /// Bits, MSB first
        bits: String,
    },
    /// Floor-divide a bit string by two
    Halve {
        /// Bits, MSB first
        bits: String,
    },
    /// Encode an unsigned 32-bit integer as 32 binary digits
    Int32 {
        /// Value in [0, 4294967295]
        value: u32,
        /// Least significant bit first
        #[arg(short, long)]
        little: bool,
    },
    /// Convert a decimal digit string to binary
    Dec2bin {
        /// Decimal digits (e.g. 913)
        digits: String,
        /// Show every halving step
        #[arg(short, long)]
        trace: bool,
        /// Print the conversion as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Demo) => {
            run_demo();
        }
        Some(Commands::Add { a, b }) => {
            add_bits(&a, &b);
        }
        Some(Commands::Value { bits }) => {
            show_value(&bits);
        }
        Some(Commands::Halve { bits }) => {
            halve_bits(&bits);
        }
        Some(Commands::Int32 { value, little }) => {
            encode_int32(value, little);
        }
        Some(Commands::Dec2bin { digits, trace, json }) => {
            convert_decimal(&digits, trace, json);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        None => {
            println!("binconv v0.1.0");
            println!("Fixed-width binary and BCD conversion routines");
            println!();
            println!("Use --help for available commands");
            println!();
            run_demo();
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("binconv started with verbosity level: {}", verbose);
}

fn fail(message: impl Display) -> ! {
    eprintln!("❌ {}", message);
    std::process::exit(1);
}

fn parse_bits(s: &str) -> binconv::BitArray {
    binconv::BitArray::parse(s).unwrap_or_else(|e| fail(format!("Invalid bit string '{}': {}", s, e)))
}

fn value_of(bits: &binconv::BitArray) -> u128 {
    binconv::bin_value(bits).unwrap_or_else(|e| fail(format!("Cannot print value: {}", e)))
}

fn add_bits(a: &str, b: &str) {
    use binconv::bin_add;

    let a = parse_bits(a);
    let b = parse_bits(b);
    let sum = bin_add(&a, &b).unwrap_or_else(|e| fail(format!("Addition failed: {}", e)));

    println!("  {}: {}", a, value_of(&a));
    println!("+ {}: {}", b, value_of(&b));
    println!("= {}: {}", sum, value_of(&sum));
}

fn show_value(bits: &str) {
    let bits = parse_bits(bits);
    println!("{}: {}", bits, value_of(&bits));
}

fn halve_bits(bits: &str) {
    use binconv::floor_div_2;

    let bits = parse_bits(bits);
    let halved = floor_div_2(&bits);
    println!("{} // 2 = {} = {}", bits, halved, value_of(&halved));
}

fn encode_int32(value: u32, little: bool) {
    use binconv::{binary_int32_big, binary_int32_lit};

    if little {
        println!("{}", binary_int32_lit(value));
    } else {
        println!("{}", binary_int32_big(value));
    }
}

fn convert_decimal(digits: &str, trace: bool, json: bool) {
    use binconv::dec2bin_trace;

    let conversion = dec2bin_trace(digits)
        .unwrap_or_else(|e| fail(format!("Conversion failed: {}", e)));

    if json {
        match serde_json::to_string_pretty(&conversion) {
            Ok(out) => println!("{}", out),
            Err(e) => fail(format!("Failed to serialize conversion: {}", e)),
        }
    } else if trace {
        println!("{}", conversion);
    } else {
        println!("{}", conversion.binary);
    }
}

fn run_demo() {
    use binconv::{bin_add, dec2bin, dec2bin_array, floor_div_2, BitArray};

    println!("━━━ Fixed-width addition ━━━");
    let a = BitArray::from([0, 1, 1, 1]);
    let b = BitArray::from([0, 1, 0, 1]);
    println!("  {:?}: {}", a.to_u8_vec(), value_of(&a));
    println!("+ {:?}: {}", b.to_u8_vec(), value_of(&b));

    let c = bin_add(&a, &b).unwrap_or_else(|e| fail(e));
    println!("= {:?}: {}", c.to_u8_vec(), value_of(&c));
    println!("      expected: {}", (value_of(&a) + value_of(&b)) % 16);
    println!();

    println!("━━━ Decimal digit groups ━━━");
    let d = "913";
    let groups = dec2bin_array(d).unwrap_or_else(|e| fail(e));
    let rendered: Vec<Vec<u8>> = groups.iter().map(BitArray::to_u8_vec).collect();
    println!("{}:\n{:?}", d, rendered);
    println!();

    println!("━━━ Halving ━━━");
    let digit_groups = dec2bin_array("0123456789").unwrap_or_else(|e| fail(e));
    for (k, group) in digit_groups.iter().enumerate() {
        let halved = floor_div_2(group);
        let v = value_of(&halved);
        let binary = dec2bin(&v.to_string()).unwrap_or_else(|e| fail(e));
        println!("{} // 2 = {:?} = {} = {}", k, halved.to_u8_vec(), v, binary);
    }
    println!();

    println!("━━━ Decimal to binary ━━━");
    let s: u64 = 1042;
    let b = dec2bin(&s.to_string()).unwrap_or_else(|e| fail(e));
    println!("{} -> {} -> {:#b}", s, b, s);
}

fn run_self_test() {
    use binconv::{
        bin_add, bin_value, binary_int32_big, binary_int32_lit, dec2bin, floor_div_2, BitArray,
    };

    println!("━━━ binconv Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    // Test 1: 7 + 5 in four bits
    print!("Addition 0111 + 0101 = 1100... ");
    let sum = bin_add(&BitArray::from([0, 1, 1, 1]), &BitArray::from([0, 1, 0, 1]));
    match sum {
        Ok(s) if s == BitArray::from([1, 1, 0, 0]) => { println!("✓"); passed += 1; }
        other => { println!("✗ (got {:?})", other); failed += 1; }
    }

    // Test 2: length mismatch is rejected
    print!("Addition rejects mismatched widths... ");
    if bin_add(&BitArray::from([0, 1]), &BitArray::from([0, 0, 1])).is_err() {
        println!("✓"); passed += 1;
    } else {
        println!("✗"); failed += 1;
    }

    // Test 3: overflow wraps
    print!("Addition wraps modulo 2^width... ");
    let mut ok = true;
    for x in 0u8..16 {
        for y in 0u8..16 {
            let a = BitArray::from_u128(u128::from(x), 4);
            let b = BitArray::from_u128(u128::from(y), 4);
            match bin_add(&a, &b) {
                Ok(s) if bin_value(&s) == Ok(u128::from((x + y) % 16)) => {}
                _ => ok = false,
            }
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 4: halving
    print!("floor_div_2(0101) = 0010... ");
    let halved = floor_div_2(&BitArray::from([0, 1, 0, 1]));
    if halved == BitArray::from([0, 0, 1, 0]) {
        println!("✓"); passed += 1;
    } else {
        println!("✗ (got {})", halved); failed += 1;
    }

    // Test 5: 32-bit encoders agree
    print!("32-bit big/little endian encoders... ");
    ok = true;
    for x in [0u32, 1, 913, 1042, u32::MAX] {
        let big = binary_int32_big(x);
        let reversed: String = big.chars().rev().collect();
        let value = BitArray::parse(&big).ok().and_then(|bits| bin_value(&bits).ok());
        if reversed != binary_int32_lit(x) || value != Some(u128::from(x)) {
            ok = false;
            break;
        }
    }
    if ok { println!("✓"); passed += 1; }
    else { println!("✗"); failed += 1; }

    // Test 6: decimal conversion
    print!("dec2bin(\"913\") = 0b1110010001... ");
    match dec2bin("913") {
        Ok(b) if b == "0b1110010001" => { println!("✓"); passed += 1; }
        other => { println!("✗ (got {:?})", other); failed += 1; }
    }

    // Test 7: values past 128 bits are refused
    print!("bin_value rejects 2^128... ");
    let mut bits = vec![0u8; 129];
    bits[0] = 1;
    if bin_value(&BitArray::from_values(&bits)).is_err() {
        println!("✓"); passed += 1;
    } else {
        println!("✗"); failed += 1;
    }

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
