/*
Run with libFuzzer:

```sh
cargo fuzz run --release --features libfuzzer obj
```

Run with AFL++:

```sh
cd fuzz
cargo afl build --release --features afl
cargo afl fuzz -i seeds/obj -o out target/release/obj
```
*/

#![cfg_attr(feature = "libfuzzer", no_main)]

use obj_loader::{mtl, obj};

#[cfg(any(
    not(any(feature = "libfuzzer", feature = "afl")),
    all(feature = "libfuzzer", feature = "afl"),
))]
compile_error!("exactly one of 'libfuzzer' or 'afl' feature must be enabled");

#[cfg(feature = "libfuzzer")]
libfuzzer_sys::fuzz_target!(|bytes: &[u8]| {
    run(bytes);
});

#[cfg(feature = "afl")]
fn main() {
    afl::fuzz!(|bytes: &[u8]| {
        run(bytes);
    });
}

fn run(bytes: &[u8]) {
    let _result = obj::from_slice(bytes, &obj::DecodeOptions::default(), |name: &str| {
        Ok(mtl::from_str(name))
    });
}
