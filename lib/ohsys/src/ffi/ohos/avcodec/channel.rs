//! # Audio Channels
//!
//! Channel sets are single speaker positions, one bit each. Channel layouts
//! are unions of channel sets. Both are declared in
//! `avcodec_audio_channel_layout.h` as 64-bit enums. The format key
//! `OH_MD_KEY_CHANNEL_LAYOUT` takes a [`ChannelLayout`].

pub type ChannelSet = u64;

pub const FRONT_LEFT: ChannelSet = 1 << 0;
pub const FRONT_RIGHT: ChannelSet = 1 << 1;
pub const FRONT_CENTER: ChannelSet = 1 << 2;
pub const LOW_FREQUENCY: ChannelSet = 1 << 3;
pub const BACK_LEFT: ChannelSet = 1 << 4;
pub const BACK_RIGHT: ChannelSet = 1 << 5;
pub const FRONT_LEFT_OF_CENTER: ChannelSet = 1 << 6;
pub const FRONT_RIGHT_OF_CENTER: ChannelSet = 1 << 7;
pub const BACK_CENTER: ChannelSet = 1 << 8;
pub const SIDE_LEFT: ChannelSet = 1 << 9;
pub const SIDE_RIGHT: ChannelSet = 1 << 10;
pub const TOP_CENTER: ChannelSet = 1 << 11;
pub const TOP_FRONT_LEFT: ChannelSet = 1 << 12;
pub const TOP_FRONT_CENTER: ChannelSet = 1 << 13;
pub const TOP_FRONT_RIGHT: ChannelSet = 1 << 14;
pub const TOP_BACK_LEFT: ChannelSet = 1 << 15;
pub const TOP_BACK_CENTER: ChannelSet = 1 << 16;
pub const TOP_BACK_RIGHT: ChannelSet = 1 << 17;
pub const STEREO_LEFT: ChannelSet = 1 << 29;
pub const STEREO_RIGHT: ChannelSet = 1 << 30;
pub const WIDE_LEFT: ChannelSet = 1 << 31;
pub const WIDE_RIGHT: ChannelSet = 1 << 32;
pub const SURROUND_DIRECT_LEFT: ChannelSet = 1 << 33;
pub const SURROUND_DIRECT_RIGHT: ChannelSet = 1 << 34;
pub const LOW_FREQUENCY_2: ChannelSet = 1 << 35;
pub const TOP_SIDE_LEFT: ChannelSet = 1 << 36;
pub const TOP_SIDE_RIGHT: ChannelSet = 1 << 37;
pub const BOTTOM_FRONT_CENTER: ChannelSet = 1 << 38;
pub const BOTTOM_FRONT_LEFT: ChannelSet = 1 << 39;
pub const BOTTOM_FRONT_RIGHT: ChannelSet = 1 << 40;
pub const AMBISONICS_ACN0: ChannelSet = 1 << 41;
pub const AMBISONICS_ACN1: ChannelSet = 1 << 42;
pub const AMBISONICS_ACN2: ChannelSet = 1 << 43;
pub const AMBISONICS_ACN3: ChannelSet = 1 << 44;
pub const AMBISONICS_W: ChannelSet = AMBISONICS_ACN0;
pub const AMBISONICS_Y: ChannelSet = AMBISONICS_ACN1;
pub const AMBISONICS_Z: ChannelSet = AMBISONICS_ACN2;
pub const AMBISONICS_X: ChannelSet = AMBISONICS_ACN3;
pub const AMBISONICS_ACN4: ChannelSet = 1 << 45;
pub const AMBISONICS_ACN5: ChannelSet = 1 << 46;
pub const AMBISONICS_ACN6: ChannelSet = 1 << 47;
pub const AMBISONICS_ACN7: ChannelSet = 1 << 48;
pub const AMBISONICS_ACN8: ChannelSet = 1 << 49;
pub const AMBISONICS_ACN9: ChannelSet = 1 << 50;
pub const AMBISONICS_ACN10: ChannelSet = 1 << 51;
pub const AMBISONICS_ACN11: ChannelSet = 1 << 52;
pub const AMBISONICS_ACN12: ChannelSet = 1 << 53;
pub const AMBISONICS_ACN13: ChannelSet = 1 << 54;
pub const AMBISONICS_ACN14: ChannelSet = 1 << 55;
pub const AMBISONICS_ACN15: ChannelSet = 1 << 56;

pub type ChannelLayout = u64;

pub const UNKNOWN_CHANNEL_LAYOUT: ChannelLayout = 0;
pub const MONO: ChannelLayout = FRONT_CENTER;
pub const STEREO: ChannelLayout = FRONT_LEFT | FRONT_RIGHT;
pub const CH_2POINT1: ChannelLayout = STEREO | LOW_FREQUENCY;
pub const CH_2_1: ChannelLayout = STEREO | BACK_CENTER;
pub const SURROUND: ChannelLayout = STEREO | FRONT_CENTER;
pub const CH_3POINT1: ChannelLayout = SURROUND | LOW_FREQUENCY;
pub const CH_4POINT0: ChannelLayout = SURROUND | BACK_CENTER;
pub const CH_4POINT1: ChannelLayout = CH_4POINT0 | LOW_FREQUENCY;
pub const CH_2_2: ChannelLayout = STEREO | SIDE_LEFT | SIDE_RIGHT;
pub const QUAD: ChannelLayout = STEREO | BACK_LEFT | BACK_RIGHT;
pub const CH_5POINT0: ChannelLayout = SURROUND | SIDE_LEFT | SIDE_RIGHT;
pub const CH_5POINT1: ChannelLayout = CH_5POINT0 | LOW_FREQUENCY;
pub const CH_5POINT0_BACK: ChannelLayout = SURROUND | BACK_LEFT | BACK_RIGHT;
pub const CH_5POINT1_BACK: ChannelLayout = CH_5POINT0_BACK | LOW_FREQUENCY;
pub const CH_6POINT0: ChannelLayout = CH_5POINT0 | BACK_CENTER;
pub const CH_6POINT0_FRONT: ChannelLayout = CH_2_2 | FRONT_LEFT_OF_CENTER | FRONT_RIGHT_OF_CENTER;
pub const HEXAGONAL: ChannelLayout = CH_5POINT0_BACK | BACK_CENTER;
pub const CH_6POINT1: ChannelLayout = CH_5POINT1 | BACK_CENTER;
pub const CH_6POINT1_BACK: ChannelLayout = CH_5POINT1_BACK | BACK_CENTER;
pub const CH_6POINT1_FRONT: ChannelLayout = CH_6POINT0_FRONT | LOW_FREQUENCY;
pub const CH_7POINT0: ChannelLayout = CH_5POINT0 | BACK_LEFT | BACK_RIGHT;
pub const CH_7POINT0_FRONT: ChannelLayout =
    CH_5POINT0 | FRONT_LEFT_OF_CENTER | FRONT_RIGHT_OF_CENTER;
pub const CH_7POINT1: ChannelLayout = CH_5POINT1 | BACK_LEFT | BACK_RIGHT;
pub const CH_7POINT1_WIDE: ChannelLayout =
    CH_5POINT1 | FRONT_LEFT_OF_CENTER | FRONT_RIGHT_OF_CENTER;
pub const CH_7POINT1_WIDE_BACK: ChannelLayout =
    CH_5POINT1_BACK | FRONT_LEFT_OF_CENTER | FRONT_RIGHT_OF_CENTER;
pub const CH_3POINT1POINT2: ChannelLayout = CH_3POINT1 | TOP_FRONT_LEFT | TOP_FRONT_RIGHT;
pub const CH_5POINT1POINT2: ChannelLayout = CH_5POINT1 | TOP_SIDE_LEFT | TOP_SIDE_RIGHT;
pub const CH_5POINT1POINT4: ChannelLayout =
    CH_5POINT1 | TOP_FRONT_LEFT | TOP_FRONT_RIGHT | TOP_BACK_LEFT | TOP_BACK_RIGHT;
pub const CH_7POINT1POINT2: ChannelLayout = CH_7POINT1 | TOP_SIDE_LEFT | TOP_SIDE_RIGHT;
pub const CH_7POINT1POINT4: ChannelLayout =
    CH_7POINT1 | TOP_FRONT_LEFT | TOP_FRONT_RIGHT | TOP_BACK_LEFT | TOP_BACK_RIGHT;
pub const CH_9POINT1POINT4: ChannelLayout = CH_7POINT1POINT4 | WIDE_LEFT | WIDE_RIGHT;
pub const CH_9POINT1POINT6: ChannelLayout = CH_9POINT1POINT4 | TOP_SIDE_LEFT | TOP_SIDE_RIGHT;
pub const CH_10POINT2: ChannelLayout =
    FRONT_LEFT | FRONT_RIGHT | FRONT_CENTER | TOP_FRONT_LEFT | TOP_FRONT_RIGHT | BACK_LEFT
        | BACK_RIGHT | BACK_CENTER | SIDE_LEFT | SIDE_RIGHT | WIDE_LEFT | WIDE_RIGHT;
pub const CH_22POINT2: ChannelLayout =
    CH_7POINT1POINT4 | FRONT_LEFT_OF_CENTER | FRONT_RIGHT_OF_CENTER | BACK_CENTER | TOP_CENTER
        | TOP_FRONT_CENTER | TOP_BACK_CENTER | TOP_SIDE_LEFT | TOP_SIDE_RIGHT
        | BOTTOM_FRONT_LEFT | BOTTOM_FRONT_RIGHT | BOTTOM_FRONT_CENTER | LOW_FREQUENCY_2;
pub const OCTAGONAL: ChannelLayout = CH_5POINT0 | BACK_LEFT | BACK_CENTER | BACK_RIGHT;
pub const HEXADECAGONAL: ChannelLayout =
    OCTAGONAL | WIDE_LEFT | WIDE_RIGHT | TOP_BACK_LEFT | TOP_BACK_RIGHT | TOP_BACK_CENTER
        | TOP_FRONT_CENTER | TOP_FRONT_LEFT | TOP_FRONT_RIGHT;
pub const STEREO_DOWNMIX: ChannelLayout = STEREO_LEFT | STEREO_RIGHT;
pub const HOA_FIRST: ChannelLayout =
    AMBISONICS_ACN0 | AMBISONICS_ACN1 | AMBISONICS_ACN2 | AMBISONICS_ACN3;
pub const HOA_SECOND: ChannelLayout =
    HOA_FIRST | AMBISONICS_ACN4 | AMBISONICS_ACN5 | AMBISONICS_ACN6 | AMBISONICS_ACN7
        | AMBISONICS_ACN8;
pub const HOA_THIRD: ChannelLayout =
    HOA_SECOND | AMBISONICS_ACN9 | AMBISONICS_ACN10 | AMBISONICS_ACN11 | AMBISONICS_ACN12
        | AMBISONICS_ACN13 | AMBISONICS_ACN14 | AMBISONICS_ACN15;
