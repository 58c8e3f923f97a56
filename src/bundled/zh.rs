pub(super) const ENTRIES: &[(&str, &str)] = &[
    // nav
    ("nav.basic", "基础配置"),
    ("nav.server", "服务配置"),
    ("nav.location", "Location配置"),
    ("nav.upstream", "Upstream配置"),
    ("nav.plugin", "插件配置"),
    ("nav.add", "添加"),
    // header
    ("header.title", "Pingap"),
    ("header.github", "Github"),
    ("header.restart", "重启"),
    ("header.restartTips", "重启 pingap 以应用最新的配置"),
    ("header.confirmRestart", "确定要重启 pingap 吗？"),
    ("header.language", "语言"),
    // basic
    ("basic.title", "修改基础配置"),
    ("basic.description", "pingap 的基础配置，包括线程数、日志级别、出错模板等"),
    ("basic.name", "名称"),
    ("basic.threads", "线程数"),
    ("basic.workStealing", "任务窃取"),
    ("basic.pidFile", "进程id文件"),
    ("basic.upgradeSock", "程序更新sock"),
    ("basic.user", "启动用户"),
    ("basic.group", "启动用户组"),
    ("basic.gracePeriod", "优雅退出等待时长"),
    ("basic.gracefulShutdownTimeout", "优雅退出超时"),
    ("basic.upstreamKeepalivePoolSize", "Upstream连接池大小"),
    ("basic.logLevel", "日志级别"),
    ("basic.webhook", "Webhook地址"),
    ("basic.webhookType", "Webhook类型"),
    ("basic.sentry", "Sentry"),
    ("basic.pyroscope", "Pyroscope"),
    ("basic.errorTemplate", "出错模板"),
    ("basic.cacheMaxSize", "缓存空间上限"),
    // server
    ("server.title", "修改服务配置"),
    ("server.description", "服务监听地址，并将请求转发至匹配的location"),
    ("server.addr", "监听地址"),
    ("server.locations", "Location列表"),
    ("server.threads", "线程数"),
    ("server.accessLog", "访问日志格式"),
    ("server.tlsCert", "Tls证书(base64)"),
    ("server.tlsKey", "Tls私钥(base64)"),
    ("server.letsEncrypt", "Let's Encrypt域名"),
    ("server.enabledH2", "启用Http2"),
    ("server.otlpExporter", "OpenTelemetry 导出地址"),
    ("server.remark", "备注"),
    // location
    ("location.title", "修改location配置"),
    ("location.description", "location根据host与path匹配请求，并转发至对应的upstream"),
    ("location.host", "域名"),
    ("location.path", "路径"),
    ("location.upstream", "Upstream"),
    ("location.rewrite", "路径重写"),
    ("location.weight", "权重"),
    ("location.proxySetHeaders", "转发请求头设置"),
    ("location.proxyAddHeaders", "转发请求头添加"),
    ("location.plugins", "插件列表"),
    ("location.remark", "备注"),
    // upstream
    ("upstream.title", "修改upstream配置"),
    ("upstream.description", "upstream包含后端地址、负载均衡与健康检查等配置"),
    ("upstream.addrs", "Upstream地址"),
    ("upstream.algo", "负载均衡算法"),
    ("upstream.healthCheck", "健康检查"),
    ("upstream.connectionTimeout", "连接超时"),
    ("upstream.totalConnectionTimeout", "总连接超时"),
    ("upstream.readTimeout", "读取超时"),
    ("upstream.idleTimeout", "空闲超时"),
    ("upstream.writeTimeout", "写超时"),
    ("upstream.alpn", "Alpn"),
    ("upstream.sni", "Sni"),
    ("upstream.verifyCert", "校验证书"),
    ("upstream.ipv4Only", "仅使用ipv4"),
    ("upstream.enableTracer", "启用跟踪"),
    ("upstream.remark", "备注"),
    // plugin
    ("plugin.title", "修改插件配置"),
    ("plugin.description", "插件在指定的阶段执行，如限流、压缩、缓存与统计等"),
    ("plugin.step", "执行阶段"),
    ("plugin.category", "类型"),
    ("plugin.value", "配置参数"),
    ("plugin.cacheLock", "缓存锁(秒)"),
    ("plugin.cacheMaxFileSize", "最大缓存文件"),
    ("plugin.cacheEviction", "启用淘汰"),
    ("plugin.limitCategory", "限制类型"),
    ("plugin.limitKey", "限制的key"),
    ("plugin.remark", "备注"),
    // form
    ("form.name", "名称"),
    ("form.nameRequired", "名称不能为空"),
    ("form.nameExists", "该名称已存在"),
    ("form.confirm", "确认"),
    ("form.cancel", "取消"),
    ("form.success", "更新成功！"),
    ("form.removing", "删除中"),
    ("form.remove", "删除"),
    ("form.addr", "地址"),
    ("form.addrRequired", "地址不能为空"),
    ("form.sortPlugin", "插件排序"),
    ("form.selectPlugin", "选择插件"),
    ("form.limitMax", "不能大于{max}"),
    ("form.limitMin", "不能小于{min}"),
    ("form.durationInvalid", "时长格式错误，如：{example}"),
];
