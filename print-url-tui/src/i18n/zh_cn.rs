//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, FormTexts, HelpTexts, HintTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "打印 URL",
        copy: "复制",
        copied: "已复制",
        clear: "清空",
        help: "帮助",
        quit: "退出",
    },

    // ========================================================================
    // 表单
    // ========================================================================
    form: FormTexts {
        url: "URL",
        environment: "环境",
        remote: "远程",
        local: "本地",
        mode: "模式",
        standalone: "独立",
        integrated: "集成",
        payload: "载荷",
        payload_hint: "粘贴请求载荷（无需是合法的 JSON）",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_field: "下一项",
        toggle: "切换",
        new_line: "换行",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status: StatusTexts {
        copy_failed: "复制失败",
        cleared: "表单已清空",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global: "全局快捷键",
        form: "表单",
        close_hint: "按 Esc 关闭帮助",
    },
};
