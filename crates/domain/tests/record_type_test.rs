use ferrous_sniffer_domain::dns_record::{class_name, opcode_name, rcode_name};
use ferrous_sniffer_domain::RecordType;

#[test]
fn test_name_tables_never_fail() {
    for code in 0..=u16::MAX {
        assert!(!RecordType::name_of(code).is_empty());
        assert!(!class_name(code).is_empty());
        assert!(!rcode_name(code & 0x0FFF).is_empty());
    }
    for code in 0..16u8 {
        assert!(!opcode_name(code).is_empty());
    }
}
