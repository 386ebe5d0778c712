#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    PTR,

    SRV,
    SOA,
    NS,
    NAPTR,
    SVCB,
    HTTPS,
    DNAME,
    ANAME,
    URI,
    LOC,
    GPOS,

    MD,
    MF,
    MB,
    MG,
    MR,
    MINFO,
    RP,
    AFSDB,
    RT,
    KX,
    PX,
    LP,
    NSAPPTR,
    TALINK,

    DS,
    DNSKEY,
    RRSIG,
    NSEC,
    NSEC3,
    NSEC3PARAM,
    CDS,
    CDNSKEY,
    KEY,
    SIG,
    TA,
    DLV,
    TSIG,

    CAA,
    TLSA,
    SMIMEA,
    SSHFP,
    CERT,
    OPENPGPKEY,
    DHCID,

    OPT,

    NULL,
    HINFO,
    X25,
    ISDN,
    SPF,
    AVC,
    NINFO,
    UINFO,
    UID,
    GID,

    NID,
    L32,
    L64,
    EUI48,
    EUI64,

    CSYNC,
    ZONEMD,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::PTR => "PTR",
            RecordType::SRV => "SRV",
            RecordType::SOA => "SOA",
            RecordType::NS => "NS",
            RecordType::NAPTR => "NAPTR",
            RecordType::SVCB => "SVCB",
            RecordType::HTTPS => "HTTPS",
            RecordType::DNAME => "DNAME",
            RecordType::ANAME => "ANAME",
            RecordType::URI => "URI",
            RecordType::LOC => "LOC",
            RecordType::GPOS => "GPOS",
            RecordType::MD => "MD",
            RecordType::MF => "MF",
            RecordType::MB => "MB",
            RecordType::MG => "MG",
            RecordType::MR => "MR",
            RecordType::MINFO => "MINFO",
            RecordType::RP => "RP",
            RecordType::AFSDB => "AFSDB",
            RecordType::RT => "RT",
            RecordType::KX => "KX",
            RecordType::PX => "PX",
            RecordType::LP => "LP",
            RecordType::NSAPPTR => "NSAP-PTR",
            RecordType::TALINK => "TALINK",
            RecordType::DS => "DS",
            RecordType::DNSKEY => "DNSKEY",
            RecordType::RRSIG => "RRSIG",
            RecordType::NSEC => "NSEC",
            RecordType::NSEC3 => "NSEC3",
            RecordType::NSEC3PARAM => "NSEC3PARAM",
            RecordType::CDS => "CDS",
            RecordType::CDNSKEY => "CDNSKEY",
            RecordType::KEY => "KEY",
            RecordType::SIG => "SIG",
            RecordType::TA => "TA",
            RecordType::DLV => "DLV",
            RecordType::TSIG => "TSIG",
            RecordType::CAA => "CAA",
            RecordType::TLSA => "TLSA",
            RecordType::SMIMEA => "SMIMEA",
            RecordType::SSHFP => "SSHFP",
            RecordType::CERT => "CERT",
            RecordType::OPENPGPKEY => "OPENPGPKEY",
            RecordType::DHCID => "DHCID",
            RecordType::OPT => "OPT",
            RecordType::NULL => "NULL",
            RecordType::HINFO => "HINFO",
            RecordType::X25 => "X25",
            RecordType::ISDN => "ISDN",
            RecordType::SPF => "SPF",
            RecordType::AVC => "AVC",
            RecordType::NINFO => "NINFO",
            RecordType::UINFO => "UINFO",
            RecordType::UID => "UID",
            RecordType::GID => "GID",
            RecordType::NID => "NID",
            RecordType::L32 => "L32",
            RecordType::L64 => "L64",
            RecordType::EUI48 => "EUI48",
            RecordType::EUI64 => "EUI64",
            RecordType::CSYNC => "CSYNC",
            RecordType::ZONEMD => "ZONEMD",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::MD => 3,
            RecordType::MF => 4,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MB => 7,
            RecordType::MG => 8,
            RecordType::MR => 9,
            RecordType::NULL => 10,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MINFO => 14,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::RP => 17,
            RecordType::AFSDB => 18,
            RecordType::X25 => 19,
            RecordType::ISDN => 20,
            RecordType::RT => 21,
            RecordType::NSAPPTR => 23,
            RecordType::SIG => 24,
            RecordType::KEY => 25,
            RecordType::PX => 26,
            RecordType::GPOS => 27,
            RecordType::AAAA => 28,
            RecordType::LOC => 29,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::KX => 36,
            RecordType::CERT => 37,
            RecordType::DNAME => 39,
            RecordType::OPT => 41,
            RecordType::DS => 43,
            RecordType::SSHFP => 44,
            RecordType::RRSIG => 46,
            RecordType::NSEC => 47,
            RecordType::DNSKEY => 48,
            RecordType::DHCID => 49,
            RecordType::NSEC3 => 50,
            RecordType::NSEC3PARAM => 51,
            RecordType::TLSA => 52,
            RecordType::SMIMEA => 53,
            RecordType::NINFO => 56,
            RecordType::TALINK => 58,
            RecordType::CDS => 59,
            RecordType::CDNSKEY => 60,
            RecordType::OPENPGPKEY => 61,
            RecordType::CSYNC => 62,
            RecordType::ZONEMD => 63,
            RecordType::SVCB => 64,
            RecordType::HTTPS => 65,
            RecordType::SPF => 99,
            RecordType::UINFO => 100,
            RecordType::UID => 101,
            RecordType::GID => 102,
            RecordType::NID => 104,
            RecordType::L32 => 105,
            RecordType::L64 => 106,
            RecordType::LP => 107,
            RecordType::EUI48 => 108,
            RecordType::EUI64 => 109,
            RecordType::TSIG => 250,
            RecordType::URI => 256,
            RecordType::CAA => 257,
            RecordType::AVC => 258,
            RecordType::TA => 32768,
            RecordType::DLV => 32769,
            RecordType::ANAME => 65305,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            3 => Some(RecordType::MD),
            4 => Some(RecordType::MF),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            7 => Some(RecordType::MB),
            8 => Some(RecordType::MG),
            9 => Some(RecordType::MR),
            10 => Some(RecordType::NULL),
            12 => Some(RecordType::PTR),
            13 => Some(RecordType::HINFO),
            14 => Some(RecordType::MINFO),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            17 => Some(RecordType::RP),
            18 => Some(RecordType::AFSDB),
            19 => Some(RecordType::X25),
            20 => Some(RecordType::ISDN),
            21 => Some(RecordType::RT),
            23 => Some(RecordType::NSAPPTR),
            24 => Some(RecordType::SIG),
            25 => Some(RecordType::KEY),
            26 => Some(RecordType::PX),
            27 => Some(RecordType::GPOS),
            28 => Some(RecordType::AAAA),
            29 => Some(RecordType::LOC),
            33 => Some(RecordType::SRV),
            35 => Some(RecordType::NAPTR),
            36 => Some(RecordType::KX),
            37 => Some(RecordType::CERT),
            39 => Some(RecordType::DNAME),
            41 => Some(RecordType::OPT),
            43 => Some(RecordType::DS),
            44 => Some(RecordType::SSHFP),
            46 => Some(RecordType::RRSIG),
            47 => Some(RecordType::NSEC),
            48 => Some(RecordType::DNSKEY),
            49 => Some(RecordType::DHCID),
            50 => Some(RecordType::NSEC3),
            51 => Some(RecordType::NSEC3PARAM),
            52 => Some(RecordType::TLSA),
            53 => Some(RecordType::SMIMEA),
            56 => Some(RecordType::NINFO),
            58 => Some(RecordType::TALINK),
            59 => Some(RecordType::CDS),
            60 => Some(RecordType::CDNSKEY),
            61 => Some(RecordType::OPENPGPKEY),
            62 => Some(RecordType::CSYNC),
            63 => Some(RecordType::ZONEMD),
            64 => Some(RecordType::SVCB),
            65 => Some(RecordType::HTTPS),
            99 => Some(RecordType::SPF),
            100 => Some(RecordType::UINFO),
            101 => Some(RecordType::UID),
            102 => Some(RecordType::GID),
            104 => Some(RecordType::NID),
            105 => Some(RecordType::L32),
            106 => Some(RecordType::L64),
            107 => Some(RecordType::LP),
            108 => Some(RecordType::EUI48),
            109 => Some(RecordType::EUI64),
            250 => Some(RecordType::TSIG),
            256 => Some(RecordType::URI),
            257 => Some(RecordType::CAA),
            258 => Some(RecordType::AVC),
            32768 => Some(RecordType::TA),
            32769 => Some(RecordType::DLV),
            65305 => Some(RecordType::ANAME),
            _ => None,
        }
    }

    /// Mnemonic for a wire type code, `TYPE{n}` (RFC 3597) when none is known.
    pub fn name_of(code: u16) -> String {
        match Self::from_u16(code) {
            Some(record_type) => record_type.as_str().to_string(),
            None => match code {
                251 => "IXFR".to_string(),
                252 => "AXFR".to_string(),
                253 => "MAILB".to_string(),
                254 => "MAILA".to_string(),
                255 => "ANY".to_string(),
                _ => format!("TYPE{}", code),
            },
        }
    }
}
