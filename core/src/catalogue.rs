//! The built-in shape catalogue.
//!
//! Declarative data: one entry per known opcode of the core categories and
//! the bundled extensions, plus the `UNDEFINED` fallback used for opcodes no
//! entry covers. Order matters; registries keep it for iteration.

use blockshape_types::{ShapeError, ShapeFlags, ShapeRecord, TriState};

const NONE: ShapeFlags = ShapeFlags::NONE;
const INDETERMINATE: TriState = TriState::Indeterminate;

/// One row of a shape catalogue: symbolic name, opcode and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogueEntry {
    name: &'static str,
    opcode: &'static str,
    flags: ShapeFlags,
}

impl CatalogueEntry {
    #[must_use]
    pub const fn new(name: &'static str, opcode: &'static str, flags: ShapeFlags) -> Self {
        Self {
            name,
            opcode,
            flags,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn opcode(&self) -> &'static str {
        self.opcode
    }

    #[must_use]
    pub const fn flags(&self) -> ShapeFlags {
        self.flags
    }

    pub fn to_record(&self) -> Result<ShapeRecord, ShapeError> {
        ShapeRecord::new(self.opcode, self.flags)
    }
}

macro_rules! catalogue {
    ($($name:ident => $opcode:literal, $flags:expr;)*) => {
        /// Symbolic names of the built-in shapes, for lookups by name.
        pub mod names {
            $(pub const $name: &str = stringify!($name);)*
        }

        /// Every built-in shape, in registration order.
        pub static BUILTIN: &[CatalogueEntry] = &[
            $(CatalogueEntry::new(stringify!($name), $opcode, $flags),)*
        ];
    };
}

/// Name of the entry returned for unknown opcodes.
pub const FALLBACK_NAME: &str = names::UNDEFINED;

/// The only shape a fallback may have: a hat that is also a cap, so nothing
/// attaches to an opcode the registry does not know.
pub const FALLBACK_FLAGS: ShapeFlags = NONE.hat().cap();

catalogue! {
    MOTION_MOVESTEPS => "motion_movesteps", NONE.stack();
    MOTION_TURNRIGHT => "motion_turnright", NONE.stack();
    MOTION_TURNLEFT => "motion_turnleft", NONE.stack();
    MOTION_GOTO => "motion_goto", NONE.stack();
    MOTION_GOTOXY => "motion_gotoxy", NONE.stack();
    MOTION_GLIDETO => "motion_glideto", NONE.stack();
    MOTION_GLIDESECSTOXY => "motion_glidesecstoxy", NONE.stack();
    MOTION_POINTINDIRECTION => "motion_pointindirection", NONE.stack();
    MOTION_POINTTOWARDS => "motion_pointtowards", NONE.stack();
    MOTION_CHANGEXBY => "motion_changexby", NONE.stack();
    MOTION_SETX => "motion_setx", NONE.stack();
    MOTION_CHANGEYBY => "motion_changeyby", NONE.stack();
    MOTION_SETY => "motion_sety", NONE.stack();
    MOTION_IFONEDGEBOUNCE => "motion_ifonedgebounce", NONE.stack();
    MOTION_SETROTATIONSTYLE => "motion_setrotationstyle", NONE.stack();
    MOTION_XPOSITION => "motion_xposition", NONE.reporter();
    MOTION_YPOSITION => "motion_yposition", NONE.reporter();
    MOTION_DIRECTION => "motion_direction", NONE.reporter();
    MOTION_SCROLL_RIGHT => "motion_scroll_right", NONE.stack();
    MOTION_SCROLL_UP => "motion_scroll_up", NONE.stack();
    MOTION_ALIGN_SCENE => "motion_align_scene", NONE.stack();
    MOTION_XSCROLL => "motion_xscroll", NONE.reporter();
    MOTION_YSCROLL => "motion_yscroll", NONE.reporter();
    MOTION_GOTO_MENU => "motion_goto_menu", NONE.reporter().menu();
    MOTION_GLIDETO_MENU => "motion_glideto_menu", NONE.reporter().menu();
    MOTION_POINTTOWARDS_MENU => "motion_pointtowards_menu", NONE.reporter().menu();

    LOOKS_SAYFORSECS => "looks_sayforsecs", NONE.stack();
    LOOKS_SAY => "looks_say", NONE.stack();
    LOOKS_THINKFORSECS => "looks_thinkforsecs", NONE.stack();
    LOOKS_THINK => "looks_think", NONE.stack();
    LOOKS_SWITCHCOSTUMETO => "looks_switchcostumeto", NONE.stack();
    LOOKS_NEXTCOSTUME => "looks_nextcostume", NONE.stack();
    LOOKS_SWITCHBACKDROPTO => "looks_switchbackdropto", NONE.stack();
    LOOKS_SWITCHBACKDROPTOANDWAIT => "looks_switchbackdroptoandwait", NONE.stack();
    LOOKS_NEXTBACKDROP => "looks_nextbackdrop", NONE.stack();
    LOOKS_CHANGESIZEBY => "looks_changesizeby", NONE.stack();
    LOOKS_SETSIZETO => "looks_setsizeto", NONE.stack();
    LOOKS_CHANGEEFFECTBY => "looks_changeeffectby", NONE.stack();
    LOOKS_SETEFFECTTO => "looks_seteffectto", NONE.stack();
    LOOKS_CLEARGRAPHICEFFECTS => "looks_cleargraphiceffects", NONE.stack();
    LOOKS_SHOW => "looks_show", NONE.stack();
    LOOKS_HIDE => "looks_hide", NONE.stack();
    LOOKS_GOTOFRONTBACK => "looks_gotofrontback", NONE.stack();
    LOOKS_GOFORWARDBACKWARDLAYERS => "looks_goforwardbackwardlayers", NONE.stack();
    LOOKS_COSTUMENUMBERNAME => "looks_costumenumbername", NONE.reporter();
    LOOKS_BACKDROPNUMBERNAME => "looks_backdropnumbername", NONE.reporter();
    LOOKS_SIZE => "looks_size", NONE.reporter();
    LOOKS_HIDEALLSPRITES => "looks_hideallsprites", NONE.stack();
    LOOKS_SETSTRETCHTO => "looks_setstretchto", NONE.stack();
    LOOKS_CHANGESTRETCHBY => "looks_changestretchby", NONE.stack();
    LOOKS_COSTUME => "looks_costume", NONE.reporter().menu();
    LOOKS_BACKDROPS => "looks_backdrops", NONE.reporter().menu();

    SOUND_PLAYUNTILDONE => "sound_playuntildone", NONE.stack();
    SOUND_PLAY => "sound_play", NONE.stack();
    SOUND_STOPALLSOUNDS => "sound_stopallsounds", NONE.stack();
    SOUND_CHANGEEFFECTBY => "sound_changeeffectby", NONE.stack();
    SOUND_SETEFFECTTO => "sound_seteffectto", NONE.stack();
    SOUND_CLEAREFFECTS => "sound_cleareffects", NONE.stack();
    SOUND_CHANGEVOLUMEBY => "sound_changevolumeby", NONE.stack();
    SOUND_SETVOLUMETO => "sound_setvolumeto", NONE.stack();
    SOUND_VOLUME => "sound_volume", NONE.reporter();
    SOUND_SOUNDS_MENU => "sound_sounds_menu", NONE.reporter().menu();

    EVENT_WHENFLAGCLICKED => "event_whenflagclicked", NONE.hat();
    EVENT_WHENKEYPRESSED => "event_whenkeypressed", NONE.hat();
    EVENT_WHENTHISSPRITECLICKED => "event_whenthisspriteclicked", NONE.hat();
    EVENT_WHENSTAGECLICKED => "event_whenstageclicked", NONE.hat();
    EVENT_WHENBACKDROPSWITCHESTO => "event_whenbackdropswitchesto", NONE.hat();
    EVENT_WHENGREATERTHAN => "event_whengreaterthan", NONE.hat();
    EVENT_WHENBROADCASTRECEIVED => "event_whenbroadcastreceived", NONE.hat();
    EVENT_BROADCAST => "event_broadcast", NONE.stack();
    EVENT_BROADCASTANDWAIT => "event_broadcastandwait", NONE.stack();
    EVENT_WHENTOUCHINGOBJECT => "event_whentouchingobject", NONE.hat();
    EVENT_BROADCAST_MENU => "event_broadcast_menu", NONE.reporter().menu();
    EVENT_TOUCHINGOBJECTMENU => "event_touchingobjectmenu", NONE.reporter().menu();

    CONTROL_WAIT => "control_wait", NONE.stack();
    CONTROL_FOREVER => "control_forever", NONE.stack().c_mouth().cap();
    CONTROL_IF => "control_if", NONE.stack().c_mouth();
    CONTROL_IF_ELSE => "control_if_else", NONE.stack().c_mouth();
    CONTROL_WAIT_UNTIL => "control_wait_until", NONE.stack();
    CONTROL_REPEAT_UNTIL => "control_repeat_until", NONE.stack().c_mouth();
    CONTROL_STOP => "control_stop", NONE.stack().with_cap(INDETERMINATE);
    CONTROL_START_AS_CLONE => "control_start_as_clone", NONE.hat();
    CONTROL_CREATE_CLONE_OF => "control_create_clone_of", NONE.stack();
    CONTROL_DELETE_THIS_CLONE => "control_delete_this_clone", NONE.stack().cap();
    CONTROL_FOR_EACH => "control_for_each", NONE.stack().c_mouth();
    CONTROL_WHILE => "control_while", NONE.stack().c_mouth();
    CONTROL_GET_COUNTER => "control_get_counter", NONE.reporter();
    CONTROL_INCR_COUNTER => "control_incr_counter", NONE.stack();
    CONTROL_CLEAR_COUNTER => "control_clear_counter", NONE.stack();
    CONTROL_ALL_AT_ONCE => "control_all_at_once", NONE.stack().c_mouth();
    CONTROL_CREATE_CLONE_OF_MENU => "control_create_clone_of_menu", NONE.reporter().menu();

    SENSING_TOUCHINGOBJECT => "sensing_touchingobject", NONE.reporter().boolean();
    SENSING_TOUCHINGCOLOR => "sensing_touchingcolor", NONE.reporter().boolean();
    SENSING_COLORISTOUCHINGCOLOR => "sensing_coloristouchingcolor", NONE.reporter().boolean();
    SENSING_DISTANCETO => "sensing_distanceto", NONE.reporter();
    SENSING_ASKANDWAIT => "sensing_askandwait", NONE.stack();
    SENSING_ANSWER => "sensing_answer", NONE.reporter();
    SENSING_KEYPRESSED => "sensing_keypressed", NONE.reporter().boolean();
    SENSING_MOUSEDOWN => "sensing_mousedown", NONE.reporter().boolean();
    SENSING_MOUSEX => "sensing_mousex", NONE.reporter();
    SENSING_MOUSEY => "sensing_mousey", NONE.reporter();
    SENSING_SETDRAGMODE => "sensing_setdragmode", NONE.stack();
    SENSING_LOUDNESS => "sensing_loudness", NONE.reporter();
    SENSING_TIMER => "sensing_timer", NONE.reporter();
    SENSING_RESETTIMER => "sensing_resettimer", NONE.stack();
    SENSING_OF => "sensing_of", NONE.reporter();
    SENSING_CURRENT => "sensing_current", NONE.reporter();
    SENSING_DAYSSINCE2000 => "sensing_dayssince2000", NONE.reporter();
    SENSING_USERNAME => "sensing_username", NONE.reporter();
    SENSING_LOUD => "sensing_loud", NONE.reporter().boolean();
    SENSING_USERID => "sensing_userid", NONE.reporter();
    SENSING_TOUCHINGOBJECTMENU => "sensing_touchingobjectmenu", NONE.reporter().menu();
    SENSING_DISTANCETOMENU => "sensing_distancetomenu", NONE.reporter().menu();
    SENSING_KEYOPTIONS => "sensing_keyoptions", NONE.reporter().menu();
    SENSING_OF_OBJECT_MENU => "sensing_of_object_menu", NONE.reporter().menu();

    OPERATOR_ADD => "operator_add", NONE.reporter();
    OPERATOR_SUBTRACT => "operator_subtract", NONE.reporter();
    OPERATOR_MULTIPLY => "operator_multiply", NONE.reporter();
    OPERATOR_DIVIDE => "operator_divide", NONE.reporter();
    OPERATOR_RANDOM => "operator_random", NONE.reporter();
    OPERATOR_GT => "operator_gt", NONE.reporter().boolean();
    OPERATOR_LT => "operator_lt", NONE.reporter().boolean();
    OPERATOR_EQUALS => "operator_equals", NONE.reporter().boolean();
    OPERATOR_AND => "operator_and", NONE.reporter().boolean();
    OPERATOR_OR => "operator_or", NONE.reporter().boolean();
    OPERATOR_NOT => "operator_not", NONE.reporter().boolean();
    OPERATOR_JOIN => "operator_join", NONE.reporter();
    OPERATOR_LETTER_OF => "operator_letter_of", NONE.reporter();
    OPERATOR_LENGTH => "operator_length", NONE.reporter();
    OPERATOR_CONTAINS => "operator_contains", NONE.reporter().boolean();
    OPERATOR_MOD => "operator_mod", NONE.reporter();
    OPERATOR_ROUND => "operator_round", NONE.reporter();
    OPERATOR_MATHOP => "operator_mathop", NONE.reporter();

    DATA_VARIABLE => "data_variable", NONE.reporter();
    DATA_SETVARIABLETO => "data_setvariableto", NONE.stack();
    DATA_CHANGEVARIABLEBY => "data_changevariableby", NONE.stack();
    DATA_SHOWVARIABLE => "data_showvariable", NONE.stack();
    DATA_HIDEVARIABLE => "data_hidevariable", NONE.stack();
    DATA_LISTCONTENTS => "data_listcontents", NONE.reporter();
    DATA_ADDTOLIST => "data_addtolist", NONE.stack();
    DATA_DELETEOFLIST => "data_deleteoflist", NONE.stack();
    DATA_DELETEALLOFLIST => "data_deletealloflist", NONE.stack();
    DATA_INSERTATLIST => "data_insertatlist", NONE.stack();
    DATA_REPLACEITEMOFLIST => "data_replaceitemoflist", NONE.stack();
    DATA_ITEMOFLIST => "data_itemoflist", NONE.reporter().boolean();
    DATA_ITEMNUMOFLIST => "data_itemnumoflist", NONE.reporter();
    DATA_LENGTHOFLIST => "data_lengthoflist", NONE.reporter();
    DATA_LISTCONTAINSITEM => "data_listcontainsitem", NONE.reporter().boolean();
    DATA_SHOWLIST => "data_showlist", NONE.stack();
    DATA_HIDELIST => "data_hidelist", NONE.stack();
    DATA_LISTINDEXALL => "data_listindexall", NONE.reporter().menu();
    DATA_LISTINDEXRANDOM => "data_listindexrandom", NONE.reporter().menu();

    PROCEDURES_DEFINITION => "procedures_definition", NONE.hat();
    PROCEDURES_CALL => "procedures_call", NONE.stack();
    PROCEDURES_DECLARATION => "procedures_declaration", NONE.stack();
    PROCEDURES_PROTOTYPE => "procedures_prototype", NONE.stack();

    ARGUMENT_REPORTER_STRING_NUMBER => "argument_reporter_string_number", NONE.reporter();
    ARGUMENT_REPORTER_BOOLEAN => "argument_reporter_boolean", NONE.reporter().boolean();
    ARGUMENT_EDITOR_REPORTER => "argument_editor_reporter", NONE.reporter().boolean();
    ARGUMENT_EDITOR_STRING_NUMBER => "argument_editor_string_number", NONE.reporter();

    MUSIC_PLAYDRUMFORBEATS => "music_playDrumForBeats", NONE.stack();
    MUSIC_RESTFORBEATS => "music_restForBeats", NONE.stack();
    MUSIC_PLAYNOTEFORBEATS => "music_playNoteForBeats", NONE.stack();
    MUSIC_SETINSTRUMENT => "music_setInstrument", NONE.stack();
    MUSIC_SETTEMPO => "music_setTempo", NONE.stack();
    MUSIC_CHANGETEMPO => "music_changeTempo", NONE.stack();
    MUSIC_GETTEMPO => "music_getTempo", NONE.reporter();
    MUSIC_MIDIPLAYDRUMFORBEATS => "music_midiPlayDrumForBeats", NONE.stack();
    MUSIC_MIDISETINSTRUMENT => "music_midiSetInstrument", NONE.stack();
    MUSIC_MENU_DRUM => "music_menu_DRUM", NONE.reporter().menu();
    MUSIC_MENU_INSTRUMENT => "music_menu_INSTRUMENT", NONE.reporter().menu();

    PEN_CLEAR => "pen_clear", NONE.stack();
    PEN_STAMP => "pen_stamp", NONE.stack();
    PEN_PENDOWN => "pen_penDown", NONE.stack();
    PEN_PENUP => "pen_penUp", NONE.stack();
    PEN_SETPENCOLORTOCOLOR => "pen_setPenColorToColor", NONE.stack();
    PEN_CHANGEPENCOLORPARAMBY => "pen_changePenColorParamBy", NONE.stack();
    PEN_SETPENCOLORPARAMTO => "pen_setPenColorParamTo", NONE.stack();
    PEN_CHANGEPENSIZEBY => "pen_changePenSizeBy", NONE.stack();
    PEN_SETPENSIZETO => "pen_setPenSizeTo", NONE.stack();
    PEN_SETPENHUETONUMBER => "pen_setPenHueToNumber", NONE.stack();
    PEN_CHANGEPENHUEBY => "pen_changePenHueBy", NONE.stack();
    PEN_SETPENSHADETONUMBER => "pen_setPenShadeToNumber", NONE.stack();
    PEN_CHANGEPENSHADEBY => "pen_changePenShadeBy", NONE.stack();
    PEN_MENU_COLORPARAM => "pen_menu_colorParam", NONE.reporter().menu();

    VIDEOSENSING_WHENMOTIONGREATERTHAN => "videoSensing_whenMotionGreaterThan", NONE.hat();
    VIDEOSENSING_VIDEOON => "videoSensing_videoOn", NONE.reporter();
    VIDEOSENSING_VIDEOTOGGLE => "videoSensing_videoToggle", NONE.stack();
    VIDEOSENSING_SETVIDEOTRANSPARENCY => "videoSensing_setVideoTransparency", NONE.stack();
    VIDEOSENSING_MENU_ATTRIBUTE => "videoSensing_menu_ATTRIBUTE", NONE.reporter().menu();
    VIDEOSENSING_MENU_SUBJECT => "videoSensing_menu_SUBJECT", NONE.reporter().menu();
    VIDEOSENSING_MENU_VIDEO_STATE => "videoSensing_menu_VIDEO_STATE", NONE.reporter().menu();

    TEXT2SPEECH_SPEAKANDWAIT => "text2speech_speakAndWait", NONE.stack();
    TEXT2SPEECH_SETVOICE => "text2speech_setVoice", NONE.stack();
    TEXT2SPEECH_SETLANGUAGE => "text2speech_setLanguage", NONE.stack();
    TEXT2SPEECH_MENU_VOICES => "text2speech_menu_voices", NONE.reporter().menu();
    TEXT2SPEECH_MENU_LANGUAGES => "text2speech_menu_languages", NONE.reporter().menu();
    TRANSLATE_GETTRANSLATE => "translate_getTranslate", NONE.reporter();
    TRANSLATE_GETVIEWERLANGUAGE => "translate_getViewerLanguage", NONE.reporter();
    TRANSLATE_MENU_LANGUAGES => "translate_menu_languages", NONE.reporter().menu();

    MAKEYMAKEY_WHENMAKEYKEYPRESSED => "makeymakey_whenMakeyKeyPressed", NONE.hat();
    MAKEYMAKEY_WHENCODEPRESSED => "makeymakey_whenCodePressed", NONE.hat();
    MAKEYMAKEY_MENU_KEY => "makeymakey_menu_KEY", NONE.reporter().menu();
    MAKEYMAKEY_MENU_SEQUENCE => "makeymakey_menu_SEQUENCE", NONE.reporter().menu();

    MICROBIT_WHENBUTTONPRESSED => "microbit_whenButtonPressed", NONE;
    MICROBIT_ISBUTTONPRESSED => "microbit_isButtonPressed", NONE;
    MICROBIT_WHENGESTURE => "microbit_whenGesture", NONE;
    MICROBIT_DISPLAYSYMBOL => "microbit_displaySymbol", NONE;
    MICROBIT_DISPLAYTEXT => "microbit_displayText", NONE;
    MICROBIT_DISPLAYCLEAR => "microbit_displayClear", NONE;
    MICROBIT_WHENTILTED => "microbit_whenTilted", NONE;
    MICROBIT_ISTILTED => "microbit_isTilted", NONE;
    MICROBIT_GETTILTANGLE => "microbit_getTiltAngle", NONE;
    MICROBIT_WHENPINCONNECTED => "microbit_whenPinConnected", NONE;
    MICROBIT_MENU_BUTTONS => "microbit_menu_buttons", NONE;
    MICROBIT_MENU_GESTURES => "microbit_menu_gestures", NONE;
    MICROBIT_MENU_TILTDIRECTIONANY => "microbit_menu_tiltDirectionAny", NONE;
    MICROBIT_MENU_TILTDIRECTION => "microbit_menu_tiltDirection", NONE;
    MICROBIT_MENU_TOUCHPINS => "microbit_menu_touchPins", NONE;
    MICROBIT_MENU_PINSTATE => "microbit_menu_pinState", NONE;

    EV3_MOTORTURNCLOCKWISE => "ev3_motorTurnClockwise", NONE;
    EV3_MOTORTURNCOUNTERCLOCKWISE => "ev3_motorTurnCounterClockwise", NONE;
    EV3_MOTORSETPOWER => "ev3_motorSetPower", NONE;
    EV3_GETMOTORPOSITION => "ev3_getMotorPosition", NONE;
    EV3_WHENBUTTONPRESSED => "ev3_whenButtonPressed", NONE;
    EV3_WHENDISTANCELESSTHAN => "ev3_whenDistanceLessThan", NONE;
    EV3_WHENBRIGHTNESSLESSTHAN => "ev3_whenBrightnessLessThan", NONE;
    EV3_BUTTONPRESSED => "ev3_buttonPressed", NONE;
    EV3_GETDISTANCE => "ev3_getDistance", NONE;
    EV3_GETBRIGHTNESS => "ev3_getBrightness", NONE;
    EV3_BEEP => "ev3_beep", NONE;
    EV3_MENU_MOTORPORTS => "ev3_menu_motorPorts", NONE;
    EV3_MENU_SENSORPORTS => "ev3_menu_sensorPorts", NONE;

    BOOST_MOTORONFOR => "boost_motorOnFor", NONE;
    BOOST_MOTORONFORROTATION => "boost_motorOnForRotation", NONE;
    BOOST_MOTORON => "boost_motorOn", NONE;
    BOOST_MOTOROFF => "boost_motorOff", NONE;
    BOOST_SETMOTORPOWER => "boost_setMotorPower", NONE;
    BOOST_SETMOTORDIRECTION => "boost_setMotorDirection", NONE;
    BOOST_GETMOTORPOSITION => "boost_getMotorPosition", NONE;
    BOOST_WHENCOLOR => "boost_whenColor", NONE;
    BOOST_SEEINGCOLOR => "boost_seeingColor", NONE;
    BOOST_WHENTILTED => "boost_whenTilted", NONE;
    BOOST_GETTILTANGLE => "boost_getTiltAngle", NONE;
    BOOST_SETLIGHTHUE => "boost_setLightHue", NONE;
    BOOST_MENU_MOTOR_ID => "boost_menu_MOTOR_ID", NONE;
    BOOST_MENU_MOTOR_DIRECTION => "boost_menu_MOTOR_DIRECTION", NONE;
    BOOST_MENU_MOTOR_REPORTER_ID => "boost_menu_MOTOR_REPORTER_ID", NONE;
    BOOST_MENU_COLOR => "boost_menu_COLOR", NONE;
    BOOST_MENU_TILT_DIRECTION_ANY => "boost_menu_TILT_DIRECTION_ANY", NONE;
    BOOST_MENU_TILT_DIRECTION => "boost_menu_TILT_DIRECTION", NONE;

    WEDO2_MOTORONFOR => "wedo2_motorOnFor", NONE;
    WEDO2_MOTORON => "wedo2_motorOn", NONE;
    WEDO2_MOTOROFF => "wedo2_motorOff", NONE;
    WEDO2_STARTMOTORPOWER => "wedo2_startMotorPower", NONE;
    WEDO2_SETMOTORDIRECTION => "wedo2_setMotorDirection", NONE;
    WEDO2_SETLIGHTHUE => "wedo2_setLightHue", NONE;
    WEDO2_WHENDISTANCE => "wedo2_whenDistance", NONE;
    WEDO2_WHENTILTED => "wedo2_whenTilted", NONE;
    WEDO2_GETDISTANCE => "wedo2_getDistance", NONE;
    WEDO2_ISTILTED => "wedo2_isTilted", NONE;
    WEDO2_GETTILTANGLE => "wedo2_getTiltAngle", NONE;
    WEDO2_PLAYNOTEFOR => "wedo2_playNoteFor", NONE;
    WEDO2_MENU_MOTOR_ID => "wedo2_menu_MOTOR_ID", NONE;
    WEDO2_MENU_MOTOR_DIRECTION => "wedo2_menu_MOTOR_DIRECTION", NONE;
    WEDO2_MENU_OP => "wedo2_menu_OP", NONE;
    WEDO2_MENU_TILT_DIRECTION_ANY => "wedo2_menu_TILT_DIRECTION_ANY", NONE;
    WEDO2_MENU_TILT_DIRECTION => "wedo2_menu_TILT_DIRECTION", NONE;

    GDXFOR_WHENGESTURE => "gdxfor_whenGesture", NONE;
    GDXFOR_WHENFORCEPUSHEDORPULLED => "gdxfor_whenForcePushedOrPulled", NONE;
    GDXFOR_GETFORCE => "gdxfor_getForce", NONE;
    GDXFOR_WHENTILTED => "gdxfor_whenTilted", NONE;
    GDXFOR_ISTILTED => "gdxfor_isTilted", NONE;
    GDXFOR_GETTILT => "gdxfor_getTilt", NONE;
    GDXFOR_ISFREEFALLING => "gdxfor_isFreeFalling", NONE;
    GDXFOR_GETSPINSPEED => "gdxfor_getSpinSpeed", NONE;
    GDXFOR_GETACCELERATION => "gdxfor_getAcceleration", NONE;
    GDXFOR_MENU_GESTUREOPTIONS => "gdxfor_menu_gestureOptions", NONE;
    GDXFOR_MENU_PUSHPULLOPTIONS => "gdxfor_menu_pushPullOptions", NONE;
    GDXFOR_MENU_TILTANYOPTIONS => "gdxfor_menu_tiltAnyOptions", NONE;
    GDXFOR_MENU_TILTOPTIONS => "gdxfor_menu_tiltOptions", NONE;
    GDXFOR_MENU_AXISOPTIONS => "gdxfor_menu_axisOptions", NONE;

    COREEXAMPLE_EXAMPLEOPCODE => "coreExample_exampleOpcode", NONE.reporter();
    COREEXAMPLE_EXAMPLEWITHINLINEIMAGE => "coreExample_exampleWithInlineImage", NONE.stack();

    NOTE => "note", NONE.reporter().menu();
    MATRIX => "matrix", NONE.reporter().menu();
    UNDEFINED => "red_hat_block", FALLBACK_FLAGS;
}
