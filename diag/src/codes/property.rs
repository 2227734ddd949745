use super::{CodeEntry, MESSAGE_LENGTH, truncate_to};

pub const PROPERTY_IDS: &[CodeEntry] = &[
    // AudioUnitProperties.h
    CodeEntry::new("kAudioUnitProperty_ClassInfo", 0),
    CodeEntry::new("kAudioUnitProperty_MakeConnection", 1),
    CodeEntry::new("kAudioUnitProperty_SampleRate", 2),
    CodeEntry::new("kAudioUnitProperty_ParameterList", 3),
    CodeEntry::new("kAudioUnitProperty_ParameterInfo", 4),
    CodeEntry::new("kAudioUnitProperty_CPULoad", 6),
    CodeEntry::new("kAudioUnitProperty_StreamFormat", 8),
    CodeEntry::new("kAudioUnitProperty_ElementCount", 11),
    CodeEntry::new("kAudioUnitProperty_Latency", 12),
    CodeEntry::new("kAudioUnitProperty_SupportedNumChannels", 13),
    CodeEntry::new("kAudioUnitProperty_MaximumFramesPerSlice", 14),
    CodeEntry::new("kAudioUnitProperty_ParameterValueStrings", 16),
    CodeEntry::new("kAudioUnitProperty_AudioChannelLayout", 19),
    CodeEntry::new("kAudioUnitProperty_TailTime", 20),
    CodeEntry::new("kAudioUnitProperty_BypassEffect", 21),
    CodeEntry::new("kAudioUnitProperty_LastRenderError", 22),
    CodeEntry::new("kAudioUnitProperty_SetRenderCallback", 23),
    CodeEntry::new("kAudioUnitProperty_FactoryPresets", 24),
    CodeEntry::new("kAudioUnitProperty_RenderQuality", 26),
    CodeEntry::new("kAudioUnitProperty_HostCallbacks", 27),
    CodeEntry::new("kAudioUnitProperty_InPlaceProcessing", 29),
    CodeEntry::new("kAudioUnitProperty_ElementName", 30),
    CodeEntry::new("kAudioUnitProperty_SupportedChannelLayoutTags", 32),
    CodeEntry::new("kAudioUnitProperty_PresentPreset", 36),
    CodeEntry::new("kAudioUnitProperty_DependentParameters", 45),
    CodeEntry::new("kAudioUnitProperty_InputSamplesInOutput", 49),
    CodeEntry::new("kAudioUnitProperty_ShouldAllocateBuffer", 51),
    CodeEntry::new("kAudioUnitProperty_FrequencyResponse", 52),
    CodeEntry::new("kAudioUnitProperty_ParameterHistoryInfo", 53),
    CodeEntry::new("kAudioUnitProperty_NickName", 54),
    CodeEntry::new("kAudioUnitProperty_OfflineRender", 37),
    CodeEntry::new("kAudioUnitProperty_ParameterIDName", 34),
    CodeEntry::new("kAudioUnitProperty_ParameterStringFromValue", 33),
    CodeEntry::new("kAudioUnitProperty_ParameterClumpName", 35),
    CodeEntry::new("kAudioUnitProperty_ParameterValueFromString", 38),
    CodeEntry::new("kAudioUnitProperty_ContextName", 25),
    CodeEntry::new("kAudioUnitProperty_PresentationLatency", 40),
    CodeEntry::new("kAudioUnitProperty_ClassInfoFromDocument", 50),
    CodeEntry::new("kAudioUnitProperty_RequestViewController", 56),
    CodeEntry::new("kAudioUnitProperty_ParametersForOverview", 57),
    CodeEntry::new("kAudioUnitProperty_SupportsMPE", 58),
    CodeEntry::new("kAudioUnitProperty_RenderContextObserver", 60),
    CodeEntry::new("kAudioUnitProperty_LastRenderSampleTime", 61),
    CodeEntry::new("kAudioUnitProperty_LoadedOutOfProcess", 62),
    CodeEntry::new("kAudioUnitProperty_FastDispatch", 5),
    CodeEntry::new("kAudioUnitProperty_SetExternalBuffer", 15),
    CodeEntry::new("kAudioUnitProperty_GetUIComponentList", 18),
    CodeEntry::new("kAudioUnitProperty_CocoaUI", 31),
    CodeEntry::new("kAudioUnitProperty_IconLocation", 39),
    CodeEntry::new("kAudioUnitProperty_AUHostIdentifier", 46),
    CodeEntry::new("kAudioUnitProperty_MIDIOutputCallbackInfo", 47),
    CodeEntry::new("kAudioUnitProperty_MIDIOutputCallback", 48),
    CodeEntry::new("kAudioUnitProperty_MIDIOutputEventListCallback", 63),
    CodeEntry::new("kAudioUnitProperty_AudioUnitMIDIProtocol", 64),
    CodeEntry::new("kAudioUnitProperty_HostMIDIProtocol", 65),
    CodeEntry::new("kAudioUnitProperty_MIDIOutputBufferSizeHint", 66),
    // MusicDevice.h
    CodeEntry::new("kMusicDeviceProperty_MIDIXMLNames", 1006),
    CodeEntry::new("kMusicDeviceProperty_PartGroup", 1010),
    CodeEntry::new("kMusicDeviceProperty_DualSchedulingMode", 1013),
    CodeEntry::new("kMusicDeviceProperty_SupportsStartStopNote", 1014),
    // plugin UI callback
    CodeEntry::new("kAudioUnitCustomPropertyUICB", 64056),
];

pub fn property_is_known(id: i32) -> bool {
    PROPERTY_IDS.iter().any(|entry| entry.code == id)
}

/// Name for an `AudioUnitPropertyID`, or `Unknown ID = <id>` on a miss.
pub fn resolve_property_name(id: i32) -> String {
    if let Some(entry) = PROPERTY_IDS.iter().find(|entry| entry.code == id) {
        return entry.name.to_string();
    }
    let mut name = format!("Unknown ID = {id}");
    truncate_to(&mut name, MESSAGE_LENGTH);
    name
}
