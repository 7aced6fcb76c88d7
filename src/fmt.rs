//! Conversions for human-readable data.

/// Hexadecimal encoding and decoding.
pub mod hex {
    use crate::Result;

    /// Encodes the given buffer as a hexadecimal string.
    pub fn encode<B: AsRef<[u8]>>(buffer: B) -> String {
        buffer.as_ref().iter().map(|b| format!("{:02X}", b)).collect()
    }

    /// Decodes the given hexadecimal string, ignoring whitespace.
    pub fn decode<H: AsRef<str>>(hex: H) -> Result<Vec<u8>> {
        let digits: Vec<u8> = hex.as_ref().bytes()
            .filter(|b| ! b.is_ascii_whitespace())
            .collect();
        if digits.len() % 2 != 0 {
            return Err(anyhow::anyhow!(
                "odd number of hexadecimal digits").into());
        }

        digits.chunks(2).map(|pair| {
            let digit = |b: u8| -> Result<u8> {
                match b {
                    b'0'..=b'9' => Ok(b - b'0'),
                    b'a'..=b'f' => Ok(b - b'a' + 10),
                    b'A'..=b'F' => Ok(b - b'A' + 10),
                    _ => Err(anyhow::anyhow!(
                        "invalid hexadecimal digit: {:?}", char::from(b))
                             .into()),
                }
            };
            Ok(digit(pair[0])? << 4 | digit(pair[1])?)
        }).collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn encode_decode() {
            assert_eq!(encode([0xde, 0xad, 0xbe, 0xef]), "DEADBEEF");
            assert_eq!(encode([]), "");

            assert_eq!(decode("deadBEEF").unwrap(),
                       vec![0xde, 0xad, 0xbe, 0xef]);
            assert_eq!(decode("de ad be ef\n").unwrap(),
                       vec![0xde, 0xad, 0xbe, 0xef]);
            assert_eq!(decode("").unwrap(), Vec::<u8>::new());

            assert!(decode("deadbee").is_err());
            assert!(decode("no").is_err());
        }
    }
}
