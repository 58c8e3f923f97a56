pub(super) const ENTRIES: &[(&str, &str)] = &[
    // nav
    ("nav.basic", "Basic"),
    ("nav.server", "Server"),
    ("nav.location", "Location"),
    ("nav.upstream", "Upstream"),
    ("nav.proxyPlugin", "Proxy Plugin"),
    ("nav.add", "Add"),
    // header
    ("header.title", "Pingap"),
    ("header.github", "Github"),
    ("header.restart", "Restart"),
    ("header.restartTips", "Restart pingap to apply the latest configuration"),
    ("header.confirmRestart", "Are you sure to restart pingap?"),
    ("header.language", "Language"),
    // basic
    ("basic.title", "Modify basic configurations"),
    (
        "basic.description",
        "Basic configuration of pingap, including threads, log level, error template and others",
    ),
    ("basic.name", "Name"),
    ("basic.threads", "Threads"),
    ("basic.workStealing", "Work Stealing"),
    ("basic.pidFile", "Pid File"),
    ("basic.upgradeSock", "Upgrade Sock"),
    ("basic.user", "User"),
    ("basic.group", "Group"),
    ("basic.gracePeriod", "Grace Period"),
    ("basic.gracefulShutdownTimeout", "Graceful Shutdown Timeout"),
    ("basic.upstreamKeepalivePoolSize", "Upstream Keepalive Pool Size"),
    ("basic.logLevel", "Log Level"),
    ("basic.webhook", "Webhook Url"),
    ("basic.webhookType", "Webhook Type"),
    ("basic.sentry", "Sentry"),
    ("basic.pyroscope", "Pyroscope"),
    ("basic.errorTemplate", "Error Template"),
    // server
    ("server.title", "Modify server configuration"),
    (
        "server.description",
        "The server listens on the address and forwards requests to the matched location",
    ),
    ("server.addr", "Listen Address"),
    ("server.locations", "Locations"),
    ("server.threads", "Threads"),
    ("server.accessLog", "Access Log"),
    ("server.tlsCert", "Tls Cert(base64)"),
    ("server.tlsKey", "Tls Key(base64)"),
    ("server.letsEncrypt", "Let's Encrypt Domains"),
    ("server.enabledH2", "Enable Http2"),
    ("server.otlpExporter", "OpenTelemetry Exporter"),
    ("server.remark", "Remark"),
    // location
    ("location.title", "Modify location configuration"),
    (
        "location.description",
        "The location matches requests by host and path, then proxies them to the upstream",
    ),
    ("location.host", "Host"),
    ("location.path", "Path"),
    ("location.upstream", "Upstream"),
    ("location.rewrite", "Rewrite Path"),
    ("location.weight", "Weight"),
    ("location.proxyPlugins", "Proxy Plugins"),
    ("location.remark", "Remark"),
    // upstream
    ("upstream.title", "Modify upstream configuration"),
    (
        "upstream.description",
        "The upstream holds backend addresses, load balancing and health check settings",
    ),
    ("upstream.addrs", "Upstream Addrs"),
    ("upstream.algo", "Load Balancer Algorithm"),
    ("upstream.healthCheck", "Health Check"),
    ("upstream.connectionTimeout", "Connection Timeout"),
    ("upstream.totalConnectionTimeout", "Total Connection Timeout"),
    ("upstream.readTimeout", "Read Timeout"),
    ("upstream.idleTimeout", "Idle Timeout"),
    ("upstream.writeTimeout", "Write Timeout"),
    ("upstream.alpn", "Alpn"),
    ("upstream.sni", "Sni"),
    ("upstream.verifyCert", "Verify Cert"),
    ("upstream.ipv4Only", "Ipv4 Only"),
    ("upstream.enableTracer", "Enable Tracer"),
    ("upstream.remark", "Remark"),
    // plugin
    ("plugin.title", "Modify proxy plugin configuration"),
    (
        "plugin.description",
        "Proxy plugins run at the configured step, e.g. limit, compression, cache and stats",
    ),
    ("plugin.step", "Proxy Step"),
    ("plugin.category", "Category"),
    ("plugin.value", "Config Value"),
    ("plugin.cacheLock", "Cache Lock(s)"),
    ("plugin.cacheMaxFileSize", "Max File Size"),
    ("plugin.cacheEviction", "Enable Eviction"),
    ("plugin.limitCategory", "Limit Category"),
    ("plugin.limitKey", "Limit Key"),
    ("plugin.remark", "Remark"),
    // form
    ("form.name", "Name"),
    ("form.nameRequired", "Name is required"),
    ("form.nameExists", "Name already exists"),
    ("form.confirm", "Confirm"),
    ("form.cancel", "Cancel"),
    ("form.success", "Update success!"),
    ("form.removing", "Removing"),
    ("form.remove", "Remove"),
    ("form.addr", "Address"),
    ("form.addrRequired", "Address is required"),
    ("form.sortPlugin", "Sort proxy plugins"),
    ("form.selectPlugin", "Select proxy plugins"),
    ("form.limitMax", "Must be less than or equal to {max}"),
    ("form.limitMin", "Must be greater than or equal to {min}"),
    ("form.durationInvalid", "Invalid duration, e.g. {example}"),
];
