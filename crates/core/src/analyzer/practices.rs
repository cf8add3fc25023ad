//! Improvement and best-practice lookups keyed by language

use crate::category::Language;
use crate::table::Lookup;

const GENERIC_IMPROVEMENTS: &[&str] = &[
    "添加适当的注释说明代码功能",
    "使用有意义的变量和函数名称",
    "考虑添加错误处理机制",
];

static LANGUAGE_IMPROVEMENTS: Lookup<Language, &[&str]> = Lookup::<Language, &[&str]>::new(
    &[
        (
            Language::Python,
            &["遵循PEP 8代码风格规范", "使用类型提示提高代码可读性"],
        ),
        (
            Language::Javascript,
            &["使用ES6+语法特性", "考虑使用TypeScript提高代码质量"],
        ),
    ],
    &[],
);

/// Generic improvements followed by the language-specific ones
pub fn improvements(language: Language) -> Vec<String> {
    GENERIC_IMPROVEMENTS
        .iter()
        .chain(LANGUAGE_IMPROVEMENTS.get(&language).iter())
        .map(|s| s.to_string())
        .collect()
}

static BEST_PRACTICES: Lookup<Language, &[&str]> = Lookup::<Language, &[&str]>::new(
    &[
        (
            Language::Python,
            &[
                "使用描述性的变量名",
                "遵循DRY原则（Don't Repeat Yourself）",
                "使用列表推导式简化代码",
                "适当使用异常处理",
                "编写单元测试",
            ],
        ),
        (
            Language::Javascript,
            &[
                "使用const和let替代var",
                "使用箭头函数简化代码",
                "使用解构赋值",
                "使用模板字符串",
                "避免全局变量污染",
            ],
        ),
        (
            Language::Java,
            &[
                "遵循Java命名约定",
                "使用访问修饰符控制可见性",
                "实现适当的异常处理",
                "使用接口和抽象类",
                "编写Javadoc注释",
            ],
        ),
        (
            Language::Cpp,
            &[
                "使用智能指针管理内存",
                "遵循RAII原则",
                "使用const修饰符",
                "避免裸指针",
                "使用STL容器和算法",
            ],
        ),
    ],
    &[
        "保持代码简洁清晰",
        "添加适当的注释",
        "遵循语言特定的编码规范",
        "进行代码审查",
        "编写测试用例",
    ],
);

pub fn best_practices(language: Language) -> Vec<String> {
    BEST_PRACTICES
        .get(&language)
        .iter()
        .map(|s| s.to_string())
        .collect()
}
