//! ABI codec tests for tron-sdk

use proptest::prelude::*;
use tron_sdk::abi::{
    decode, decode_input, decode_parameters, encode, encode_call, encode_parameters,
    function_selector, AbiType, AbiValue, FunctionDescriptor, I256,
};
use tron_sdk::{Address, SdkError, U256};

// ==================== Known vectors ====================

#[test]
fn test_transfer_selector() {
    assert_eq!(hex::encode(function_selector("transfer(address,uint256)")), "a9059cbb");
}

#[test]
fn test_mixed_static_and_dynamic_layout() {
    let types = [AbiType::String, AbiType::Uint(256), AbiType::Bytes];
    let values = [
        AbiValue::string("abc"),
        AbiValue::uint(5),
        AbiValue::Bytes(vec![0x11; 33]),
    ];
    let encoded = encode(&types, &values).unwrap();

    let word = |i: usize| U256::from_big_endian(&encoded[i * 32..(i + 1) * 32]);
    // head: offset(string), 5, offset(bytes)
    assert_eq!(word(0), U256::from(96));
    assert_eq!(word(1), U256::from(5));
    assert_eq!(word(2), U256::from(160));
    // string tail: length + one padded word
    assert_eq!(word(3), U256::from(3));
    assert_eq!(&encoded[128..131], b"abc");
    // bytes tail: length + two padded words
    assert_eq!(word(5), U256::from(33));
    assert_eq!(encoded.len(), 32 * 8);

    assert_eq!(decode(&types, &encoded).unwrap(), values.to_vec());
}

#[test]
fn test_int256_extremes() {
    let min = I256::new(U256::one() << 255, true);
    let max = I256::new((U256::one() << 255) - 1, false);
    let values = [AbiValue::Int(min), AbiValue::Int(max)];
    let types = [AbiType::Int(256), AbiType::Int(256)];

    let encoded = encode(&types, &values).unwrap();
    assert_eq!(encoded[0], 0x80);
    assert!(encoded[1..32].iter().all(|b| *b == 0));
    assert_eq!(encoded[32], 0x7f);

    assert_eq!(decode(&types, &encoded).unwrap(), values.to_vec());
}

#[test]
fn test_parameters_hex_is_bare() {
    let function = FunctionDescriptor::new("set", vec![AbiType::Bool], vec![]);
    let hex = encode_parameters(&function, &[AbiValue::Bool(true)]).unwrap();
    assert!(!hex.starts_with("0x"));
    assert_eq!(hex.len(), 64);
}

#[test]
fn test_call_data_decodes_as_input() {
    let function = FunctionDescriptor::new(
        "transfer",
        vec![AbiType::Address, AbiType::Uint(256)],
        vec![AbiType::Bool],
    );
    let to = Address::from_hex("41a614f803b6fd780986a42c78ec9c7f77e6ded13c").unwrap();
    let values = vec![AbiValue::Address(to), AbiValue::uint(1_000_000)];

    let call = encode_call(&function, &values).unwrap();
    assert_eq!(decode_input(&function, &format!("0x{}", hex::encode(&call))).unwrap(), values);
}

#[test]
fn test_decode_errors_are_abi_decode() {
    let short_word = "00".repeat(31);
    let cases: [(&[AbiType], &str); 3] = [
        (&[AbiType::Uint(256)], "00"),
        (&[AbiType::Bool], &short_word),
        (&[AbiType::String], "0x12"),
    ];
    for (types, hex) in cases {
        assert!(
            matches!(decode_parameters(types, hex), Err(SdkError::AbiDecode(_))),
            "{} should fail",
            hex
        );
    }
}

// ==================== Properties ====================

fn address_strategy() -> impl Strategy<Value = AbiValue> {
    prop::array::uniform20(any::<u8>()).prop_map(|p| AbiValue::Address(Address::from_payload(p)))
}

fn param_strategy() -> impl Strategy<Value = (AbiType, AbiValue)> {
    prop_oneof![
        address_strategy().prop_map(|v| (AbiType::Address, v)),
        any::<bool>().prop_map(|b| (AbiType::Bool, AbiValue::Bool(b))),
        any::<[u8; 32]>().prop_map(|b| (AbiType::Uint(256), AbiValue::Uint(U256::from_big_endian(&b)))),
        any::<u8>().prop_map(|n| (AbiType::Uint(8), AbiValue::uint(n as u128))),
        any::<i64>().prop_map(|n| (AbiType::Int(64), AbiValue::int(n as i128))),
        any::<i128>().prop_map(|n| (AbiType::Int(256), AbiValue::int(n))),
        (1usize..=32)
            .prop_flat_map(|n| prop::collection::vec(any::<u8>(), n))
            .prop_map(|b| (AbiType::FixedBytes(b.len()), AbiValue::FixedBytes(b))),
        prop::collection::vec(any::<u8>(), 0..100).prop_map(|b| (AbiType::Bytes, AbiValue::Bytes(b))),
        ".{0,40}".prop_map(|s| (AbiType::String, AbiValue::String(s))),
    ]
}

proptest! {
    #[test]
    fn decode_inverts_encode(params in prop::collection::vec(param_strategy(), 0..8)) {
        let (types, values): (Vec<AbiType>, Vec<AbiValue>) = params.into_iter().unzip();
        let encoded = encode(&types, &values).unwrap();

        prop_assert_eq!(encoded.len() % 32, 0);
        prop_assert_eq!(decode(&types, &encoded).unwrap(), values);
    }

    #[test]
    fn decode_never_panics_on_garbage(data in prop::collection::vec(any::<u8>(), 0..200)) {
        let types = [AbiType::String, AbiType::Bytes, AbiType::Int(16), AbiType::Address];
        let _ = decode(&types, &data);
    }
}
