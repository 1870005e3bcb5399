#![no_main]

use chess_games::Square;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(square) = Square::from_ascii(data) {
        assert_eq!(square.to_string().as_bytes(), data);
        assert_eq!(Square::try_from(square.to_u32()), Ok(square));
    }
});
