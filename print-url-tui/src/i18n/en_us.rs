//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, FormTexts, HelpTexts, HintTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Print URL",
        copy: "Copy",
        copied: "Copied",
        clear: "Clear",
        help: "Help",
        quit: "Quit",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    form: FormTexts {
        url: "URL",
        environment: "Environment",
        remote: "Remote",
        local: "Local",
        mode: "Mode",
        standalone: "Standalone",
        integrated: "Integrated",
        payload: "Payload",
        payload_hint: "Paste request payload (no need to format as valid JSON)",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_field: "Next field",
        toggle: "Toggle",
        new_line: "New line",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        copy_failed: "Copy failed",
        cleared: "Form cleared",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global: "Global shortcuts",
        form: "Form",
        close_hint: "Press Esc to close the help",
    },
};
