use super::{CodeEntry, UNKNOWN_STATUS, fourcc};

pub const STATUS_CODES: &[CodeEntry] = &[
    // MacTypes.h
    CodeEntry::new("noErr", 0),
    CodeEntry::new("kAudio_ParamError", -50),
    // AUComponent.h
    CodeEntry::new("kAudioUnitErr_InvalidProperty", -10879),
    CodeEntry::new("kAudioUnitErr_InvalidParameter", -10878),
    CodeEntry::new("kAudioUnitErr_InvalidElement", -10877),
    CodeEntry::new("kAudioUnitErr_NoConnection", -10876),
    CodeEntry::new("kAudioUnitErr_FailedInitialization", -10875),
    CodeEntry::new("kAudioUnitErr_TooManyFramesToProcess", -10874),
    CodeEntry::new("kAudioUnitErr_InvalidFile", -10871),
    CodeEntry::new("kAudioUnitErr_UnknownFileType", -10870),
    CodeEntry::new("kAudioUnitErr_FileNotSpecified", -10869),
    CodeEntry::new("kAudioUnitErr_FormatNotSupported", -10868),
    CodeEntry::new("kAudioUnitErr_Uninitialized", -10867),
    CodeEntry::new("kAudioUnitErr_InvalidScope", -10866),
    CodeEntry::new("kAudioUnitErr_PropertyNotWritable", -10865),
    CodeEntry::new("kAudioUnitErr_CannotDoInCurrentContext", -10863),
    CodeEntry::new("kAudioUnitErr_InvalidPropertyValue", -10851),
    CodeEntry::new("kAudioUnitErr_PropertyNotInUse", -10850),
    CodeEntry::new("kAudioUnitErr_Initialized", -10849),
    CodeEntry::new("kAudioUnitErr_InvalidOfflineRender", -10848),
    CodeEntry::new("kAudioUnitErr_Unauthorized", -10847),
    CodeEntry::new("kAudioUnitErr_MIDIOutputBufferFull", -66753),
    CodeEntry::new("kAudioComponentErr_InstanceTimedOut", -66754),
    CodeEntry::new("kAudioComponentErr_InstanceInvalidated", -66749),
    CodeEntry::new("kAudioUnitErr_RenderTimeout", -66745),
    CodeEntry::new("kAudioUnitErr_ExtensionNotFound", -66744),
    CodeEntry::new("kAudioUnitErr_InvalidParameterValue", -66743),
    CodeEntry::new("kAudioUnitErr_InvalidFilePath", -66742),
    CodeEntry::new("kAudioUnitErr_MissingKey", -66741),
    CodeEntry::new("kAudioUnitErr_ComponentManagerNotSupported", -66740),
    CodeEntry::new("kAudioUnitErr_MultipleVoiceProcessors", -66635),
];

pub fn status_is_known(code: i32) -> bool {
    STATUS_CODES.iter().any(|entry| entry.code == code)
}

/// Name for an `OSStatus`.
///
/// Table hit first, then four-character-code decoding for positive values,
/// then [`UNKNOWN_STATUS`].
pub fn resolve_status_name(code: i32) -> String {
    if let Some(entry) = STATUS_CODES.iter().find(|entry| entry.code == code) {
        return entry.name.to_string();
    }
    if code > 0 {
        fourcc(code)
    } else {
        UNKNOWN_STATUS.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_entry_resolves_to_its_name() {
        for entry in STATUS_CODES {
            assert_eq!(resolve_status_name(entry.code), entry.name);
        }
    }

    #[test]
    fn zero_is_no_err() {
        assert_eq!(resolve_status_name(0), "noErr");
    }

    #[test]
    fn positive_miss_decodes_fourcc() {
        assert_eq!(resolve_status_name(0x6E6F4572), "noEr");
        assert_eq!(resolve_status_name(i32::from_be_bytes(*b"!dat")), "!dat");
    }

    #[test]
    fn negative_miss_is_placeholder() {
        assert_eq!(resolve_status_name(-1), "????");
        assert_eq!(resolve_status_name(-10880), "????");
        assert_eq!(resolve_status_name(i32::MIN), "????");
    }

    #[test]
    fn known_predicate_matches_table() {
        assert!(status_is_known(-50));
        assert!(!status_is_known(-51));
    }
}
