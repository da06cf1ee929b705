//! # Input Kit
//!
//! Key codes of the multi-modal input subsystem, as declared in
//! `oh_key_code.h` (`libohinput.so`), and the input event handles other kits
//! pass to their callbacks.

opaque! {
    /// Key event (`Input_KeyEvent`).
    pub struct KeyEvent;
    /// Mouse event (`Input_MouseEvent`).
    pub struct MouseEvent;
    /// Touch event (`Input_TouchEvent`).
    pub struct TouchEvent;
}

pub type KeyCode = i32;

pub const KEYCODE_UNKNOWN: KeyCode = -1;
pub const KEYCODE_FN: KeyCode = 0;
pub const KEYCODE_HOME: KeyCode = 1;
pub const KEYCODE_BACK: KeyCode = 2;
pub const KEYCODE_SEARCH: KeyCode = 9;
pub const KEYCODE_MEDIA_PLAY_PAUSE: KeyCode = 10;
pub const KEYCODE_MEDIA_STOP: KeyCode = 11;
pub const KEYCODE_MEDIA_NEXT: KeyCode = 12;
pub const KEYCODE_MEDIA_PREVIOUS: KeyCode = 13;
pub const KEYCODE_MEDIA_REWIND: KeyCode = 14;
pub const KEYCODE_MEDIA_FAST_FORWARD: KeyCode = 15;
pub const KEYCODE_VOLUME_UP: KeyCode = 16;
pub const KEYCODE_VOLUME_DOWN: KeyCode = 17;
pub const KEYCODE_POWER: KeyCode = 18;
pub const KEYCODE_CAMERA: KeyCode = 19;
pub const KEYCODE_VOLUME_MUTE: KeyCode = 22;
pub const KEYCODE_MUTE: KeyCode = 23;
pub const KEYCODE_BRIGHTNESS_UP: KeyCode = 40;
pub const KEYCODE_BRIGHTNESS_DOWN: KeyCode = 41;
pub const KEYCODE_0: KeyCode = 2000;
pub const KEYCODE_1: KeyCode = 2001;
pub const KEYCODE_2: KeyCode = 2002;
pub const KEYCODE_3: KeyCode = 2003;
pub const KEYCODE_4: KeyCode = 2004;
pub const KEYCODE_5: KeyCode = 2005;
pub const KEYCODE_6: KeyCode = 2006;
pub const KEYCODE_7: KeyCode = 2007;
pub const KEYCODE_8: KeyCode = 2008;
pub const KEYCODE_9: KeyCode = 2009;
pub const KEYCODE_STAR: KeyCode = 2010;
pub const KEYCODE_POUND: KeyCode = 2011;
pub const KEYCODE_DPAD_UP: KeyCode = 2012;
pub const KEYCODE_DPAD_DOWN: KeyCode = 2013;
pub const KEYCODE_DPAD_LEFT: KeyCode = 2014;
pub const KEYCODE_DPAD_RIGHT: KeyCode = 2015;
pub const KEYCODE_DPAD_CENTER: KeyCode = 2016;
pub const KEYCODE_A: KeyCode = 2017;
pub const KEYCODE_B: KeyCode = 2018;
pub const KEYCODE_C: KeyCode = 2019;
pub const KEYCODE_D: KeyCode = 2020;
pub const KEYCODE_E: KeyCode = 2021;
pub const KEYCODE_F: KeyCode = 2022;
pub const KEYCODE_G: KeyCode = 2023;
pub const KEYCODE_H: KeyCode = 2024;
pub const KEYCODE_I: KeyCode = 2025;
pub const KEYCODE_J: KeyCode = 2026;
pub const KEYCODE_K: KeyCode = 2027;
pub const KEYCODE_L: KeyCode = 2028;
pub const KEYCODE_M: KeyCode = 2029;
pub const KEYCODE_N: KeyCode = 2030;
pub const KEYCODE_O: KeyCode = 2031;
pub const KEYCODE_P: KeyCode = 2032;
pub const KEYCODE_Q: KeyCode = 2033;
pub const KEYCODE_R: KeyCode = 2034;
pub const KEYCODE_S: KeyCode = 2035;
pub const KEYCODE_T: KeyCode = 2036;
pub const KEYCODE_U: KeyCode = 2037;
pub const KEYCODE_V: KeyCode = 2038;
pub const KEYCODE_W: KeyCode = 2039;
pub const KEYCODE_X: KeyCode = 2040;
pub const KEYCODE_Y: KeyCode = 2041;
pub const KEYCODE_Z: KeyCode = 2042;
pub const KEYCODE_COMMA: KeyCode = 2043;
pub const KEYCODE_PERIOD: KeyCode = 2044;
pub const KEYCODE_ALT_LEFT: KeyCode = 2045;
pub const KEYCODE_ALT_RIGHT: KeyCode = 2046;
pub const KEYCODE_SHIFT_LEFT: KeyCode = 2047;
pub const KEYCODE_SHIFT_RIGHT: KeyCode = 2048;
pub const KEYCODE_TAB: KeyCode = 2049;
pub const KEYCODE_SPACE: KeyCode = 2050;
pub const KEYCODE_SYM: KeyCode = 2051;
pub const KEYCODE_EXPLORER: KeyCode = 2052;
pub const KEYCODE_ENVELOPE: KeyCode = 2053;
pub const KEYCODE_ENTER: KeyCode = 2054;
pub const KEYCODE_DEL: KeyCode = 2055;
pub const KEYCODE_GRAVE: KeyCode = 2056;
pub const KEYCODE_MINUS: KeyCode = 2057;
pub const KEYCODE_EQUALS: KeyCode = 2058;
pub const KEYCODE_LEFT_BRACKET: KeyCode = 2059;
pub const KEYCODE_RIGHT_BRACKET: KeyCode = 2060;
pub const KEYCODE_BACKSLASH: KeyCode = 2061;
pub const KEYCODE_SEMICOLON: KeyCode = 2062;
pub const KEYCODE_APOSTROPHE: KeyCode = 2063;
pub const KEYCODE_SLASH: KeyCode = 2064;
pub const KEYCODE_AT: KeyCode = 2065;
pub const KEYCODE_PLUS: KeyCode = 2066;
pub const KEYCODE_MENU: KeyCode = 2067;
pub const KEYCODE_PAGE_UP: KeyCode = 2068;
pub const KEYCODE_PAGE_DOWN: KeyCode = 2069;
pub const KEYCODE_ESCAPE: KeyCode = 2070;
pub const KEYCODE_FORWARD_DEL: KeyCode = 2071;
pub const KEYCODE_CTRL_LEFT: KeyCode = 2072;
pub const KEYCODE_CTRL_RIGHT: KeyCode = 2073;
pub const KEYCODE_CAPS_LOCK: KeyCode = 2074;
pub const KEYCODE_SCROLL_LOCK: KeyCode = 2075;
pub const KEYCODE_META_LEFT: KeyCode = 2076;
pub const KEYCODE_META_RIGHT: KeyCode = 2077;
pub const KEYCODE_FUNCTION: KeyCode = 2078;
pub const KEYCODE_SYSRQ: KeyCode = 2079;
pub const KEYCODE_BREAK: KeyCode = 2080;
pub const KEYCODE_MOVE_HOME: KeyCode = 2081;
pub const KEYCODE_MOVE_END: KeyCode = 2082;
pub const KEYCODE_INSERT: KeyCode = 2083;
pub const KEYCODE_FORWARD: KeyCode = 2084;
pub const KEYCODE_MEDIA_PLAY: KeyCode = 2085;
pub const KEYCODE_MEDIA_PAUSE: KeyCode = 2086;
pub const KEYCODE_MEDIA_CLOSE: KeyCode = 2087;
pub const KEYCODE_MEDIA_EJECT: KeyCode = 2088;
pub const KEYCODE_MEDIA_RECORD: KeyCode = 2089;
pub const KEYCODE_F1: KeyCode = 2090;
pub const KEYCODE_F2: KeyCode = 2091;
pub const KEYCODE_F3: KeyCode = 2092;
pub const KEYCODE_F4: KeyCode = 2093;
pub const KEYCODE_F5: KeyCode = 2094;
pub const KEYCODE_F6: KeyCode = 2095;
pub const KEYCODE_F7: KeyCode = 2096;
pub const KEYCODE_F8: KeyCode = 2097;
pub const KEYCODE_F9: KeyCode = 2098;
pub const KEYCODE_F10: KeyCode = 2099;
pub const KEYCODE_F11: KeyCode = 2100;
pub const KEYCODE_F12: KeyCode = 2101;
pub const KEYCODE_NUM_LOCK: KeyCode = 2102;
pub const KEYCODE_NUMPAD_0: KeyCode = 2103;
pub const KEYCODE_NUMPAD_1: KeyCode = 2104;
pub const KEYCODE_NUMPAD_2: KeyCode = 2105;
pub const KEYCODE_NUMPAD_3: KeyCode = 2106;
pub const KEYCODE_NUMPAD_4: KeyCode = 2107;
pub const KEYCODE_NUMPAD_5: KeyCode = 2108;
pub const KEYCODE_NUMPAD_6: KeyCode = 2109;
pub const KEYCODE_NUMPAD_7: KeyCode = 2110;
pub const KEYCODE_NUMPAD_8: KeyCode = 2111;
pub const KEYCODE_NUMPAD_9: KeyCode = 2112;
pub const KEYCODE_NUMPAD_DIVIDE: KeyCode = 2113;
pub const KEYCODE_NUMPAD_MULTIPLY: KeyCode = 2114;
pub const KEYCODE_NUMPAD_SUBTRACT: KeyCode = 2115;
pub const KEYCODE_NUMPAD_ADD: KeyCode = 2116;
pub const KEYCODE_NUMPAD_DOT: KeyCode = 2117;
pub const KEYCODE_NUMPAD_COMMA: KeyCode = 2118;
pub const KEYCODE_NUMPAD_ENTER: KeyCode = 2119;
pub const KEYCODE_NUMPAD_EQUALS: KeyCode = 2120;
pub const KEYCODE_NUMPAD_LEFT_PAREN: KeyCode = 2121;
pub const KEYCODE_NUMPAD_RIGHT_PAREN: KeyCode = 2122;
pub const KEYCODE_VIRTUAL_MULTITASK: KeyCode = 2210;
pub const KEYCODE_BUTTON_A: KeyCode = 2301;
pub const KEYCODE_BUTTON_B: KeyCode = 2302;
pub const KEYCODE_BUTTON_X: KeyCode = 2304;
pub const KEYCODE_BUTTON_Y: KeyCode = 2305;
pub const KEYCODE_BUTTON_L1: KeyCode = 2307;
pub const KEYCODE_BUTTON_R1: KeyCode = 2308;
pub const KEYCODE_BUTTON_L2: KeyCode = 2309;
pub const KEYCODE_BUTTON_R2: KeyCode = 2310;
pub const KEYCODE_BUTTON_SELECT: KeyCode = 2311;
pub const KEYCODE_BUTTON_START: KeyCode = 2312;
pub const KEYCODE_BUTTON_MODE: KeyCode = 2313;
pub const KEYCODE_BUTTON_THUMBL: KeyCode = 2314;
pub const KEYCODE_BUTTON_THUMBR: KeyCode = 2315;
pub const KEYCODE_SLEEP: KeyCode = 2600;
pub const KEYCODE_ZENKAKU_HANKAKU: KeyCode = 2601;
pub const KEYCODE_102ND: KeyCode = 2602;
pub const KEYCODE_RO: KeyCode = 2603;
pub const KEYCODE_KATAKANA: KeyCode = 2604;
pub const KEYCODE_HIRAGANA: KeyCode = 2605;
pub const KEYCODE_HENKAN: KeyCode = 2606;
pub const KEYCODE_KATAKANA_HIRAGANA: KeyCode = 2607;
pub const KEYCODE_MUHENKAN: KeyCode = 2608;
pub const KEYCODE_LINEFEED: KeyCode = 2609;
pub const KEYCODE_MACRO: KeyCode = 2610;
pub const KEYCODE_NUMPAD_PLUSMINUS: KeyCode = 2611;
pub const KEYCODE_SCALE: KeyCode = 2612;
pub const KEYCODE_HANGUEL: KeyCode = 2613;
pub const KEYCODE_HANJA: KeyCode = 2614;
pub const KEYCODE_YEN: KeyCode = 2615;
pub const KEYCODE_STOP: KeyCode = 2616;
pub const KEYCODE_AGAIN: KeyCode = 2617;
pub const KEYCODE_PROPS: KeyCode = 2618;
pub const KEYCODE_UNDO: KeyCode = 2619;
pub const KEYCODE_COPY: KeyCode = 2620;
pub const KEYCODE_OPEN: KeyCode = 2621;
pub const KEYCODE_PASTE: KeyCode = 2622;
pub const KEYCODE_FIND: KeyCode = 2623;
pub const KEYCODE_CUT: KeyCode = 2624;
pub const KEYCODE_HELP: KeyCode = 2625;
pub const KEYCODE_CALC: KeyCode = 2626;
pub const KEYCODE_FILE: KeyCode = 2627;
pub const KEYCODE_BOOKMARKS: KeyCode = 2628;
pub const KEYCODE_NEXT: KeyCode = 2629;
pub const KEYCODE_PLAYPAUSE: KeyCode = 2630;
pub const KEYCODE_PREVIOUS: KeyCode = 2631;
pub const KEYCODE_STOPCD: KeyCode = 2632;
pub const KEYCODE_CONFIG: KeyCode = 2634;
pub const KEYCODE_REFRESH: KeyCode = 2635;
pub const KEYCODE_EXIT: KeyCode = 2636;
pub const KEYCODE_EDIT: KeyCode = 2637;
pub const KEYCODE_SCROLLUP: KeyCode = 2638;
pub const KEYCODE_SCROLLDOWN: KeyCode = 2639;
pub const KEYCODE_NEW: KeyCode = 2640;
pub const KEYCODE_REDO: KeyCode = 2641;
pub const KEYCODE_CLOSE: KeyCode = 2642;
pub const KEYCODE_PLAY: KeyCode = 2643;
pub const KEYCODE_BASSBOOST: KeyCode = 2644;
pub const KEYCODE_PRINT: KeyCode = 2645;
pub const KEYCODE_CHAT: KeyCode = 2646;
pub const KEYCODE_FINANCE: KeyCode = 2647;
pub const KEYCODE_CANCEL: KeyCode = 2648;
pub const KEYCODE_KBDILLUM_TOGGLE: KeyCode = 2649;
pub const KEYCODE_KBDILLUM_DOWN: KeyCode = 2650;
pub const KEYCODE_KBDILLUM_UP: KeyCode = 2651;
pub const KEYCODE_SEND: KeyCode = 2652;
pub const KEYCODE_REPLY: KeyCode = 2653;
pub const KEYCODE_FORWARDMAIL: KeyCode = 2654;
pub const KEYCODE_SAVE: KeyCode = 2655;
pub const KEYCODE_DOCUMENTS: KeyCode = 2656;
pub const KEYCODE_VIDEO_NEXT: KeyCode = 2657;
pub const KEYCODE_VIDEO_PREV: KeyCode = 2658;
pub const KEYCODE_BRIGHTNESS_CYCLE: KeyCode = 2659;
pub const KEYCODE_BRIGHTNESS_ZERO: KeyCode = 2660;
pub const KEYCODE_DISPLAY_OFF: KeyCode = 2661;
pub const KEYCODE_BTN_MISC: KeyCode = 2662;
pub const KEYCODE_GOTO: KeyCode = 2663;
pub const KEYCODE_INFO: KeyCode = 2664;
pub const KEYCODE_PROGRAM: KeyCode = 2665;
pub const KEYCODE_PVR: KeyCode = 2666;
pub const KEYCODE_SUBTITLE: KeyCode = 2667;
pub const KEYCODE_FULL_SCREEN: KeyCode = 2668;
pub const KEYCODE_KEYBOARD: KeyCode = 2669;
pub const KEYCODE_ASPECT_RATIO: KeyCode = 2670;
pub const KEYCODE_PC: KeyCode = 2671;
pub const KEYCODE_TV: KeyCode = 2672;
pub const KEYCODE_TV2: KeyCode = 2673;
pub const KEYCODE_VCR: KeyCode = 2674;
pub const KEYCODE_VCR2: KeyCode = 2675;
pub const KEYCODE_SAT: KeyCode = 2676;
pub const KEYCODE_CD: KeyCode = 2677;
pub const KEYCODE_TAPE: KeyCode = 2678;
pub const KEYCODE_TUNER: KeyCode = 2679;
pub const KEYCODE_PLAYER: KeyCode = 2680;
pub const KEYCODE_DVD: KeyCode = 2681;
pub const KEYCODE_AUDIO: KeyCode = 2682;
pub const KEYCODE_VIDEO: KeyCode = 2683;
pub const KEYCODE_MEMO: KeyCode = 2684;
pub const KEYCODE_CALENDAR: KeyCode = 2685;
pub const KEYCODE_RED: KeyCode = 2686;
pub const KEYCODE_GREEN: KeyCode = 2687;
pub const KEYCODE_YELLOW: KeyCode = 2688;
pub const KEYCODE_BLUE: KeyCode = 2689;
pub const KEYCODE_CHANNELUP: KeyCode = 2690;
pub const KEYCODE_CHANNELDOWN: KeyCode = 2691;
pub const KEYCODE_LAST: KeyCode = 2692;
pub const KEYCODE_RESTART: KeyCode = 2693;
pub const KEYCODE_SLOW: KeyCode = 2694;
pub const KEYCODE_SHUFFLE: KeyCode = 2695;
pub const KEYCODE_VIDEOPHONE: KeyCode = 2696;
pub const KEYCODE_GAMES: KeyCode = 2697;
pub const KEYCODE_ZOOMIN: KeyCode = 2698;
pub const KEYCODE_ZOOMOUT: KeyCode = 2699;
pub const KEYCODE_ZOOMRESET: KeyCode = 2700;
pub const KEYCODE_WORDPROCESSOR: KeyCode = 2701;
pub const KEYCODE_EDITOR: KeyCode = 2702;
pub const KEYCODE_SPREADSHEET: KeyCode = 2703;
pub const KEYCODE_GRAPHICSEDITOR: KeyCode = 2704;
pub const KEYCODE_PRESENTATION: KeyCode = 2705;
pub const KEYCODE_DATABASE: KeyCode = 2706;
pub const KEYCODE_NEWS: KeyCode = 2707;
pub const KEYCODE_VOICEMAIL: KeyCode = 2708;
pub const KEYCODE_ADDRESSBOOK: KeyCode = 2709;
pub const KEYCODE_MESSENGER: KeyCode = 2710;
pub const KEYCODE_BRIGHTNESS_TOGGLE: KeyCode = 2711;
pub const KEYCODE_SPELLCHECK: KeyCode = 2712;
pub const KEYCODE_COFFEE: KeyCode = 2713;
pub const KEYCODE_MEDIA_REPEAT: KeyCode = 2714;
pub const KEYCODE_IMAGES: KeyCode = 2715;
pub const KEYCODE_BUTTONCONFIG: KeyCode = 2716;
pub const KEYCODE_TASKMANAGER: KeyCode = 2717;
pub const KEYCODE_JOURNAL: KeyCode = 2718;
pub const KEYCODE_CONTROLPANEL: KeyCode = 2719;
pub const KEYCODE_APPSELECT: KeyCode = 2720;
pub const KEYCODE_SCREENSAVER: KeyCode = 2721;
pub const KEYCODE_ASSISTANT: KeyCode = 2722;
pub const KEYCODE_KBD_LAYOUT_NEXT: KeyCode = 2723;
pub const KEYCODE_BRIGHTNESS_MIN: KeyCode = 2724;
pub const KEYCODE_BRIGHTNESS_MAX: KeyCode = 2725;
pub const KEYCODE_KBDINPUTASSIST_PREV: KeyCode = 2726;
pub const KEYCODE_KBDINPUTASSIST_NEXT: KeyCode = 2727;
pub const KEYCODE_KBDINPUTASSIST_PREVGROUP: KeyCode = 2728;
pub const KEYCODE_KBDINPUTASSIST_NEXTGROUP: KeyCode = 2729;
pub const KEYCODE_KBDINPUTASSIST_ACCEPT: KeyCode = 2730;
pub const KEYCODE_KBDINPUTASSIST_CANCEL: KeyCode = 2731;
pub const KEYCODE_FRONT: KeyCode = 2800;
pub const KEYCODE_SETUP: KeyCode = 2801;
pub const KEYCODE_WAKEUP: KeyCode = 2802;
pub const KEYCODE_SENDFILE: KeyCode = 2803;
pub const KEYCODE_DELETEFILE: KeyCode = 2804;
pub const KEYCODE_XFER: KeyCode = 2805;
pub const KEYCODE_PROG1: KeyCode = 2806;
pub const KEYCODE_PROG2: KeyCode = 2807;
pub const KEYCODE_MSDOS: KeyCode = 2808;
pub const KEYCODE_SCREENLOCK: KeyCode = 2809;
pub const KEYCODE_DIRECTION_ROTATE_DISPLAY: KeyCode = 2810;
pub const KEYCODE_CYCLEWINDOWS: KeyCode = 2811;
pub const KEYCODE_COMPUTER: KeyCode = 2812;
pub const KEYCODE_EJECTCLOSECD: KeyCode = 2813;
pub const KEYCODE_ISO: KeyCode = 2814;
pub const KEYCODE_MOVE: KeyCode = 2815;
pub const KEYCODE_F13: KeyCode = 2816;
pub const KEYCODE_F14: KeyCode = 2817;
pub const KEYCODE_F15: KeyCode = 2818;
pub const KEYCODE_F16: KeyCode = 2819;
pub const KEYCODE_F17: KeyCode = 2820;
pub const KEYCODE_F18: KeyCode = 2821;
pub const KEYCODE_F19: KeyCode = 2822;
pub const KEYCODE_F20: KeyCode = 2823;
pub const KEYCODE_F21: KeyCode = 2824;
pub const KEYCODE_F22: KeyCode = 2825;
pub const KEYCODE_F23: KeyCode = 2826;
pub const KEYCODE_F24: KeyCode = 2827;
pub const KEYCODE_PROG3: KeyCode = 2828;
pub const KEYCODE_PROG4: KeyCode = 2829;
pub const KEYCODE_DASHBOARD: KeyCode = 2830;
pub const KEYCODE_SUSPEND: KeyCode = 2831;
pub const KEYCODE_HP: KeyCode = 2832;
pub const KEYCODE_SOUND: KeyCode = 2833;
pub const KEYCODE_QUESTION: KeyCode = 2834;
pub const KEYCODE_CONNECT: KeyCode = 2836;
pub const KEYCODE_SPORT: KeyCode = 2837;
pub const KEYCODE_SHOP: KeyCode = 2838;
pub const KEYCODE_ALTERASE: KeyCode = 2839;
pub const KEYCODE_SWITCHVIDEOMODE: KeyCode = 2841;
pub const KEYCODE_BATTERY: KeyCode = 2842;
pub const KEYCODE_BLUETOOTH: KeyCode = 2843;
pub const KEYCODE_WLAN: KeyCode = 2844;
pub const KEYCODE_UWB: KeyCode = 2845;
pub const KEYCODE_WWAN_WIMAX: KeyCode = 2846;
pub const KEYCODE_RFKILL: KeyCode = 2847;
pub const KEYCODE_CHANNEL: KeyCode = 3001;
pub const KEYCODE_BTN_0: KeyCode = 3100;
pub const KEYCODE_BTN_1: KeyCode = 3101;
pub const KEYCODE_BTN_2: KeyCode = 3102;
pub const KEYCODE_BTN_3: KeyCode = 3103;
pub const KEYCODE_BTN_4: KeyCode = 3104;
pub const KEYCODE_BTN_5: KeyCode = 3105;
pub const KEYCODE_BTN_6: KeyCode = 3106;
pub const KEYCODE_BTN_7: KeyCode = 3107;
pub const KEYCODE_BTN_8: KeyCode = 3108;
pub const KEYCODE_BTN_9: KeyCode = 3109;
pub const KEYCODE_DAGGER_CLICK: KeyCode = 3211;
pub const KEYCODE_DAGGER_DOUBLE_CLICK: KeyCode = 3212;
pub const KEYCODE_DAGGER_LONG_PRESS: KeyCode = 3213;
pub const KEYCODE_DIV: KeyCode = 3220;
